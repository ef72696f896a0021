//! Icon extraction for list rows
//!
//! Pulls the icon for an item out of the file named by its
//! [`IconLocation`](crate::shortcut::IconLocation) using the Windows Shell32
//! API and converts it to 32x32 RGBA pixels. Files without embedded icons
//! (documents, media) get the shell's icon for their file type.
//!
//! Other platforms have no icon source; extraction returns `Ok(None)` there.

use crate::error::Result;
use crate::shortcut::IconLocation;
use tracing::debug;

#[cfg(windows)]
use crate::error::LauncherError;
#[cfg(windows)]
use windows::Win32::Graphics::Gdi::{
    BI_RGB, BITMAP, BITMAPINFO, BITMAPINFOHEADER, CreateCompatibleDC, DIB_RGB_COLORS, DeleteDC,
    DeleteObject, GetDIBits, GetObjectW, SelectObject,
};
#[cfg(windows)]
use windows::Win32::Storage::FileSystem::FILE_FLAGS_AND_ATTRIBUTES;
#[cfg(windows)]
use windows::Win32::UI::Shell::{
    ExtractIconExW, SHFILEINFOW, SHGFI_ICON, SHGFI_LARGEICON, SHGetFileInfoW,
};
#[cfg(windows)]
use windows::Win32::UI::WindowsAndMessaging::{DestroyIcon, GetIconInfo, HICON, ICONINFO};
#[cfg(windows)]
use windows::core::PCWSTR;

/// Edge length of extracted icons in pixels
pub const ICON_SIZE: usize = 32;

/// Extract the icon at `location` as `ICON_SIZE` x `ICON_SIZE` RGBA bytes.
///
/// Returns `Ok(None)` where icons are not supported. On Windows an error
/// means neither the indexed icon nor the shell file-type icon could be read.
pub fn extract_icon(location: &IconLocation) -> Result<Option<Vec<u8>>> {
    #[cfg(windows)]
    {
        extract_icon_windows(location).map(Some)
    }

    #[cfg(not(windows))]
    {
        debug!(
            "Icon extraction not supported on this platform: {}",
            location.path.display()
        );
        Ok(None)
    }
}

#[cfg(windows)]
#[expect(
    unsafe_code,
    reason = "Shell32 icon APIs are only reachable through FFI"
)]
fn extract_icon_windows(location: &IconLocation) -> Result<Vec<u8>> {
    use std::os::windows::ffi::OsStrExt;

    let wide_path: Vec<u16> = location
        .path
        .as_os_str()
        .encode_wide()
        .chain(std::iter::once(0))
        .collect();

    debug!(
        "Extracting icon {} from {}",
        location.index,
        location.path.display()
    );

    let mut large_icon = HICON::default();

    // SAFETY: wide_path is NUL-terminated and outlives the call; large_icon is
    // a valid out-pointer for exactly one icon.
    let extracted = unsafe {
        ExtractIconExW(
            PCWSTR(wide_path.as_ptr()),
            location.index,
            Some(&raw mut large_icon),
            None,
            1,
        )
    };

    if extracted == 0 || large_icon.is_invalid() {
        debug!(
            "No embedded icon in {}, asking the shell",
            location.path.display()
        );
        return extract_icon_using_shgetfileinfo(&wide_path, location);
    }

    let icon_data = hicon_to_rgba_bytes(large_icon);

    // SAFETY: the handle came from ExtractIconExW and is destroyed once
    unsafe {
        let _ = DestroyIcon(large_icon);
    }

    icon_data
}

/// Fallback icon extraction using `SHGetFileInfoW`
#[cfg(windows)]
#[expect(
    unsafe_code,
    reason = "Shell32 icon APIs are only reachable through FFI"
)]
fn extract_icon_using_shgetfileinfo(
    wide_path: &[u16],
    location: &IconLocation,
) -> Result<Vec<u8>> {
    let mut file_info = SHFILEINFOW::default();

    #[expect(
        clippy::cast_possible_truncation,
        reason = "size_of::<SHFILEINFOW>() is a compile-time constant that fits in u32"
    )]
    // SAFETY: wide_path is NUL-terminated; file_info is sized by the cbfileinfo argument
    let result = unsafe {
        SHGetFileInfoW(
            PCWSTR(wide_path.as_ptr()),
            FILE_FLAGS_AND_ATTRIBUTES(0),
            Some(&raw mut file_info),
            std::mem::size_of::<SHFILEINFOW>() as u32,
            SHGFI_ICON | SHGFI_LARGEICON,
        )
    };

    if result == 0 || file_info.hIcon.is_invalid() {
        return Err(LauncherError::IconExtractionError(
            location.path.display().to_string(),
        ));
    }

    let icon_data = hicon_to_rgba_bytes(file_info.hIcon);

    // SAFETY: SHGFI_ICON hands ownership of hIcon to the caller
    unsafe {
        let _ = DestroyIcon(file_info.hIcon);
    }

    icon_data
}

/// Convert an `HICON` to `ICON_SIZE` x `ICON_SIZE` RGBA bytes
#[cfg(windows)]
#[expect(
    unsafe_code,
    reason = "GDI bitmap access is only reachable through FFI"
)]
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    reason = "Icon bitmaps are at most 256x256, far inside i32/u32 range"
)]
fn hicon_to_rgba_bytes(hicon: HICON) -> Result<Vec<u8>> {
    let mut icon_info = ICONINFO::default();

    // SAFETY: hicon is a live icon handle; icon_info is a valid out-pointer.
    // The bitmaps GetIconInfo creates are owned by us and deleted below.
    unsafe {
        GetIconInfo(hicon, &raw mut icon_info)?;

        let color_bitmap = icon_info.hbmColor;
        let mask_bitmap = icon_info.hbmMask;
        let cleanup = || {
            let _ = DeleteObject(color_bitmap.into());
            let _ = DeleteObject(mask_bitmap.into());
        };

        if color_bitmap.is_invalid() {
            // Monochrome icon without a colour plane
            cleanup();
            return Err(LauncherError::IconExtractionError(
                "monochrome icon".to_string(),
            ));
        }

        let mut bitmap = BITMAP::default();
        if GetObjectW(
            color_bitmap.into(),
            std::mem::size_of::<BITMAP>() as i32,
            Some((&raw mut bitmap).cast()),
        ) == 0
        {
            cleanup();
            return Err(LauncherError::WindowsApiError(
                windows::core::Error::from_thread(),
            ));
        }

        let width = bitmap.bmWidth.unsigned_abs() as usize;
        let height = bitmap.bmHeight.unsigned_abs() as usize;

        let hdc = CreateCompatibleDC(None);
        if hdc.is_invalid() {
            cleanup();
            return Err(LauncherError::WindowsApiError(
                windows::core::Error::from_thread(),
            ));
        }

        let old_bitmap = SelectObject(hdc, color_bitmap.into());

        let mut bmi = BITMAPINFO::default();
        bmi.bmiHeader.biSize = std::mem::size_of::<BITMAPINFOHEADER>() as u32;
        bmi.bmiHeader.biWidth = width as i32;
        bmi.bmiHeader.biHeight = -(height as i32); // Negative for top-down DIB
        bmi.bmiHeader.biPlanes = 1;
        bmi.bmiHeader.biBitCount = 32;
        bmi.bmiHeader.biCompression = BI_RGB.0;

        let mut buffer = vec![0u8; width * height * 4];

        let lines = GetDIBits(
            hdc,
            color_bitmap,
            0,
            height as u32,
            Some(buffer.as_mut_ptr().cast()),
            &raw mut bmi,
            DIB_RGB_COLORS,
        );

        let _ = SelectObject(hdc, old_bitmap);
        let _ = DeleteDC(hdc);
        cleanup();

        if lines == 0 {
            return Err(LauncherError::WindowsApiError(
                windows::core::Error::from_thread(),
            ));
        }

        bgra_to_rgba(&mut buffer);

        if width != ICON_SIZE || height != ICON_SIZE {
            buffer = resize_icon_simple(&buffer, width, height, ICON_SIZE, ICON_SIZE);
        }

        Ok(buffer)
    }
}

/// Swap BGRA pixels to RGBA in place.
///
/// Legacy icons leave the alpha channel empty; those are made fully opaque.
#[cfg_attr(not(windows), allow(dead_code))]
fn bgra_to_rgba(buffer: &mut [u8]) {
    let has_alpha = buffer.chunks_exact(4).any(|pixel| pixel[3] != 0);
    for pixel in buffer.chunks_exact_mut(4) {
        pixel.swap(0, 2);
        if !has_alpha {
            pixel[3] = 0xFF;
        }
    }
}

/// Nearest-neighbour resize of RGBA pixel data
#[cfg_attr(not(windows), allow(dead_code))]
fn resize_icon_simple(
    src: &[u8],
    src_width: usize,
    src_height: usize,
    dst_width: usize,
    dst_height: usize,
) -> Vec<u8> {
    let mut dst = vec![0u8; dst_width * dst_height * 4];
    if src_width == 0 || src_height == 0 {
        return dst;
    }

    for y in 0..dst_height {
        for x in 0..dst_width {
            let src_x = (x * src_width) / dst_width;
            let src_y = (y * src_height) / dst_height;

            let src_idx = (src_y * src_width + src_x) * 4;
            let dst_idx = (y * dst_width + x) * 4;

            dst[dst_idx..dst_idx + 4].copy_from_slice(&src[src_idx..src_idx + 4]);
        }
    }

    dst
}
