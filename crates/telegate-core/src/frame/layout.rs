pub const FUNC_CODE_OFFSET: usize = 1;
pub const GATEWAY_ID_RANGE: std::ops::Range<usize> = 2..4;
pub const YEAR_RANGE: std::ops::Range<usize> = 4..6;
pub const MONTH_OFFSET: usize = 6;
pub const DAY_OFFSET: usize = 7;
pub const HOUR_OFFSET: usize = 8;
pub const MINUTE_OFFSET: usize = 9;
pub const SECOND_OFFSET: usize = 10;
pub const PAYLOAD_LEN_RANGE: std::ops::Range<usize> = 11..13;
pub const PAYLOAD_OFFSET: usize = 13;

pub const FUNC_CODE_FIRST: u8 = 0xB1;
pub const FUNC_CODE_LAST: u8 = 0xB4;

pub const MIN_LEN: usize = 2;
pub const HEADER_LEN: usize = PAYLOAD_OFFSET;
pub const CHECKSUM_LEN: usize = 1;
pub const SAMPLE_LEN: usize = 2;
