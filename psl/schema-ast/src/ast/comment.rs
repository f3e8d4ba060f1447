/// A documentation comment (`///`-prefixed), stripped of its markers.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub text: String,
}
