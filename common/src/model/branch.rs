/// Departments offered by the upload form.
pub const BRANCHES: [&str; 6] = [
    "Computer Science and Engineering",
    "Informational Technology",
    "Electronics and Communication Engineering",
    "Electrical Engineering",
    "Mechanical Engineering",
    "Civil Engineering",
];

pub fn is_known_branch(branch: &str) -> bool {
    BRANCHES.contains(&branch)
}
