pub const EMPTY_IDENTIFIER_ERROR: &'static str = "identifier is empty";
pub const LONG_IDENTIFIER_ERROR: &'static str = "identifier is too long";
pub const SHORT_IDENTIFIER_ERROR: &'static str = "identifier is too short";
pub const IDENTIFIER_CHARACTER_ERROR: &'static str = "identifier contains an invalid character";
pub const IDENTIFIER_EDGE_ERROR: &'static str = "identifier starts or ends with an invalid character";

pub const MIN_PROJECT_ID_LEN: usize = 6;
pub const MAX_PROJECT_ID_LEN: usize = 63;
pub const MAX_DATASET_ID_LEN: usize = 1024;
pub const MAX_TABLE_ID_LEN: usize = 1024;
