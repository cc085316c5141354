//! Constants for candidate boundary extension and URI validation.

/// Characters absorbed leftward after an `@` (userinfo).
pub const USERINFO_CHARS: &str = concat!(
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789",
    ";:&=+$,",
    "-_.!~*()",
    "%"
);

/// Characters absorbed rightward after a `/` (path, query and fragment).
///
/// The trailing group `[]<>{}^|'\`` is not valid in RFC 3986 paths but
/// shows up in pasted links often enough to keep.
pub const PATH_CHARS: &str = concat!(
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789",
    "/;?:@&=+$,%#",
    "-_.!~*()",
    "[]<>{}^|'`"
);

/// Characters absorbed leftward before `://` (scheme).
pub const SCHEME_CHARS: &str = concat!(
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789",
    "+-."
);

/// Separator between a scheme and the authority.
pub const SCHEME_SEPARATOR: &str = "://";

/// Largest port number accepted after a host.
///
/// Ports are not limited to 16 bits; anything up to `i32::MAX` is kept.
pub const MAX_PORT: u32 = 2_147_483_647;
