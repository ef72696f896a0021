//! Initial window placement near the mouse pointer

/// Distance kept between the window and the screen edges, in pixels
pub const SCREEN_MARGIN: i32 = 10;

/// Top-left corner for a `width` x `height` window centred on `cursor`,
/// kept inside a `screen_width` x `screen_height` screen with `margin`
/// pixels to spare on every side.
///
/// A window larger than the screen is pinned to the top-left margin.
pub fn centered_on_cursor(
    cursor: (i32, i32),
    (width, height): (u32, u32),
    (screen_width, screen_height): (u32, u32),
    margin: i32,
) -> (i32, i32) {
    let clamp_axis = |center: i32, size: u32, screen: u32| {
        let size = i32::try_from(size).unwrap_or(i32::MAX);
        let screen = i32::try_from(screen).unwrap_or(i32::MAX);
        let start = center.saturating_sub(size / 2);
        let max_start = screen.saturating_sub(size).saturating_sub(margin);
        start.min(max_start).max(margin)
    };

    (
        clamp_axis(cursor.0, width, screen_width),
        clamp_axis(cursor.1, height, screen_height),
    )
}

/// Pointer position and primary screen size, when the platform reports them
///
/// Only the primary monitor is measured: with the pointer on a secondary
/// monitor the window is clamped back onto the primary one.
#[cfg(windows)]
#[expect(
    unsafe_code,
    reason = "Cursor and screen metrics are only reachable through FFI"
)]
pub fn cursor_and_screen() -> Option<((i32, i32), (u32, u32))> {
    use windows::Win32::Foundation::POINT;
    use windows::Win32::UI::WindowsAndMessaging::{
        GetCursorPos, GetSystemMetrics, SM_CXSCREEN, SM_CYSCREEN,
    };

    let mut point = POINT::default();
    // SAFETY: point is a valid out-pointer; the metrics calls take no pointers
    let (width, height) = unsafe {
        GetCursorPos(&raw mut point).ok()?;
        (GetSystemMetrics(SM_CXSCREEN), GetSystemMetrics(SM_CYSCREEN))
    };

    Some((
        (point.x, point.y),
        (u32::try_from(width).ok()?, u32::try_from(height).ok()?),
    ))
}

/// Pointer position and primary screen size (not available on this platform)
#[cfg(not(windows))]
pub fn cursor_and_screen() -> Option<((i32, i32), (u32, u32))> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: (u32, u32) = (1920, 1080);
    const WINDOW: (u32, u32) = (400, 500);

    #[test]
    fn test_centered_in_the_middle() {
        assert_eq!(
            centered_on_cursor((960, 540), WINDOW, SCREEN, SCREEN_MARGIN),
            (760, 290)
        );
    }

    #[test]
    fn test_clamped_at_top_left() {
        assert_eq!(
            centered_on_cursor((0, 0), WINDOW, SCREEN, SCREEN_MARGIN),
            (10, 10)
        );
    }

    #[test]
    fn test_clamped_at_bottom_right() {
        assert_eq!(
            centered_on_cursor((1919, 1079), WINDOW, SCREEN, SCREEN_MARGIN),
            (1920 - 400 - 10, 1080 - 500 - 10)
        );
    }

    #[test]
    fn test_pointer_beyond_primary_screen_is_clamped_onto_it() {
        assert_eq!(
            centered_on_cursor((2500, 400), WINDOW, SCREEN, SCREEN_MARGIN),
            (1920 - 400 - 10, 150)
        );
    }

    #[test]
    fn test_window_larger_than_screen() {
        assert_eq!(
            centered_on_cursor((100, 100), (3000, 2000), SCREEN, SCREEN_MARGIN),
            (10, 10)
        );
    }
}
