//! Argument marshaling and result decoding for native calls.
//!
//! This is the only place that turns Rust values into C arguments or
//! interprets native integers. Conventions shared by every entry point:
//! - text is sent as NUL-terminated UTF-8
//! - booleans are sent as `1` / `0`
//! - an integer result of `1` means success, anything else failure

use std::ffi::CString;
use std::os::raw::c_int;
use std::path::Path;

use nebulabun_common::NativeError;

/// Native success value.
pub const SUCCESS: c_int = 1;

/// Convert text into a NUL-terminated buffer.
///
/// Fails when the text contains an interior NUL byte, which the native side
/// would silently truncate.
pub fn to_c_string(arg: &'static str, text: &str) -> Result<CString, NativeError> {
    CString::new(text).map_err(|_| NativeError::InteriorNul { arg })
}

/// Convert a filesystem path into a NUL-terminated UTF-8 buffer.
pub fn path_to_c_string(arg: &'static str, path: &Path) -> Result<CString, NativeError> {
    let text = path
        .to_str()
        .ok_or_else(|| NativeError::NonUtf8Path(path.to_path_buf()))?;
    to_c_string(arg, text)
}

/// Window dimension as a C int, saturating at `c_int::MAX`.
pub fn dimension(value: u32) -> c_int {
    c_int::try_from(value).unwrap_or(c_int::MAX)
}

pub fn flag(value: bool) -> c_int {
    c_int::from(value)
}

/// Decode a native status result.
pub fn decode_status(function: &'static str, code: c_int) -> Result<(), NativeError> {
    if code == SUCCESS {
        Ok(())
    } else {
        Err(NativeError::CallFailed(function))
    }
}

/// Clamp any transparency level into the native alpha range.
pub fn clamp_alpha(level: i32) -> u8 {
    // The clamp guarantees the cast is lossless.
    level.clamp(0, 255) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn text_gets_a_nul_terminator() {
        let c = to_c_string("html", "<p>hi</p>").unwrap();
        assert_eq!(c.as_bytes_with_nul(), b"<p>hi</p>\0");
    }

    #[test]
    fn empty_text_is_allowed() {
        let c = to_c_string("title", "").unwrap();
        assert_eq!(c.as_bytes_with_nul(), b"\0");
    }

    #[test]
    fn utf8_is_passed_through_bytewise() {
        let c = to_c_string("title", "星雲").unwrap();
        assert_eq!(c.as_bytes(), "星雲".as_bytes());
    }

    #[test]
    fn interior_nul_is_rejected() {
        let err = to_c_string("script", "alert(1)\0alert(2)").unwrap_err();
        assert!(matches!(err, NativeError::InteriorNul { arg: "script" }));
    }

    #[test]
    fn path_marshals_as_utf8() {
        let c = path_to_c_string("path", Path::new("/tmp/app.html")).unwrap();
        assert_eq!(c.as_bytes(), b"/tmp/app.html");
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_path_is_rejected() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let path = PathBuf::from(OsStr::from_bytes(b"/tmp/\xff.html"));
        let err = path_to_c_string("path", &path).unwrap_err();
        assert!(matches!(err, NativeError::NonUtf8Path(_)));
    }

    #[test]
    fn dimensions_saturate() {
        assert_eq!(dimension(800), 800);
        assert_eq!(dimension(u32::MAX), c_int::MAX);
    }

    #[test]
    fn flags_are_one_or_zero() {
        assert_eq!(flag(true), 1);
        assert_eq!(flag(false), 0);
    }

    #[test]
    fn only_one_decodes_as_success() {
        assert!(decode_status("close_window", 1).is_ok());
        assert!(matches!(
            decode_status("close_window", 0),
            Err(NativeError::CallFailed("close_window"))
        ));
        assert!(decode_status("close_window", 2).is_err());
        assert!(decode_status("close_window", -1).is_err());
    }

    #[test]
    fn alpha_is_clamped() {
        assert_eq!(clamp_alpha(-10), 0);
        assert_eq!(clamp_alpha(0), 0);
        assert_eq!(clamp_alpha(128), 128);
        assert_eq!(clamp_alpha(255), 255);
        assert_eq!(clamp_alpha(300), 255);
        assert_eq!(clamp_alpha(i32::MIN), 0);
        assert_eq!(clamp_alpha(i32::MAX), 255);
    }
}
