pub mod id {
    use nutype::nutype;

    pub const MAX_ID_LENGTH: usize = 64;

    /// Unique employee identifier.
    ///
    /// Opaque string; may consist purely of decimal digits (including
    /// leading zeros), so it is never parsed as a number.
    #[nutype(
        sanitize(trim),
        validate(not_empty, len_char_max = MAX_ID_LENGTH),
        derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            AsRef,
            Deref,
            TryFrom,
            Into,
            Hash,
            Borrow,
            Display,
            Serialize,
            Deserialize,
        )
    )]
    pub struct EmployeeId(String);
}

pub use id::EmployeeId;
