//! Writes `.lnk` files for tests
//!
//! Produces just enough of the Shell Link format to describe a target:
//! header, an optional `LinkInfo` (local or network), Unicode string data
//! and an optional environment-variable block. Shared by unit tests,
//! integration tests and benches.

#![allow(dead_code)]
#![allow(clippy::unwrap_used)]

use std::path::{Path, PathBuf};

const HEADER_SIZE: u32 = 0x4C;
const LINK_CLSID: [u8; 16] = [
    0x01, 0x14, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0xC0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x46,
];
const ENVIRONMENT_BLOCK_SIGNATURE: u32 = 0xA000_0001;

const HAS_LINK_INFO: u32 = 0x0000_0002;
const HAS_NAME: u32 = 0x0000_0004;
const HAS_RELATIVE_PATH: u32 = 0x0000_0008;
const HAS_WORKING_DIR: u32 = 0x0000_0010;
const HAS_ARGUMENTS: u32 = 0x0000_0020;
const HAS_ICON_LOCATION: u32 = 0x0000_0040;
const IS_UNICODE: u32 = 0x0000_0080;
const HAS_EXP_STRING: u32 = 0x0000_0200;

/// Shortcut contents; unset fields are left out of the file
#[derive(Default)]
pub struct Shortcut<'a> {
    /// Local target path, stored as ASCII in `LinkInfo`
    pub target: Option<&'a str>,
    /// Local target path as raw code-page bytes, overrides `target`
    pub ansi_target: Option<&'a [u8]>,
    /// UNC share (`\\server\share`) plus `network_suffix`
    pub network_share: Option<&'a str>,
    pub network_suffix: Option<&'a str>,
    pub description: Option<&'a str>,
    pub relative_path: Option<&'a str>,
    pub working_dir: Option<&'a str>,
    pub arguments: Option<&'a str>,
    pub icon_location: Option<&'a str>,
    pub icon_index: i32,
    pub environment_target: Option<&'a str>,
}

impl Shortcut<'_> {
    /// Serialize and write to `dir/file_name`
    pub fn write_to(&self, dir: &Path, file_name: &str) -> PathBuf {
        let path = dir.join(file_name);
        std::fs::write(&path, self.build()).unwrap();
        path
    }

    pub fn build(&self) -> Vec<u8> {
        let local = self
            .ansi_target
            .map(<[u8]>::to_vec)
            .or_else(|| self.target.map(|t| t.as_bytes().to_vec()));
        let link_info = match (local, self.network_share) {
            (Some(base), _) => Some(local_link_info(&base)),
            (None, Some(share)) => Some(network_link_info(share, self.network_suffix.unwrap_or(""))),
            (None, None) => None,
        };

        let strings = [
            (self.description, HAS_NAME),
            (self.relative_path, HAS_RELATIVE_PATH),
            (self.working_dir, HAS_WORKING_DIR),
            (self.arguments, HAS_ARGUMENTS),
            (self.icon_location, HAS_ICON_LOCATION),
        ];

        let mut link_flags = IS_UNICODE;
        if link_info.is_some() {
            link_flags |= HAS_LINK_INFO;
        }
        for (value, bit) in strings {
            if value.is_some() {
                link_flags |= bit;
            }
        }
        if self.environment_target.is_some() {
            link_flags |= HAS_EXP_STRING;
        }

        let mut out = Vec::new();
        out.extend_from_slice(&HEADER_SIZE.to_le_bytes());
        out.extend_from_slice(&LINK_CLSID);
        out.extend_from_slice(&link_flags.to_le_bytes());
        out.extend_from_slice(&0x20u32.to_le_bytes()); // FILE_ATTRIBUTE_ARCHIVE
        out.extend_from_slice(&[0u8; 24]); // timestamps
        out.extend_from_slice(&0u32.to_le_bytes()); // file size
        out.extend_from_slice(&self.icon_index.to_le_bytes());
        out.extend_from_slice(&1u32.to_le_bytes()); // SW_SHOWNORMAL
        out.extend_from_slice(&[0u8; 12]); // hotkey + reserved

        if let Some(link_info) = link_info {
            out.extend_from_slice(&link_info);
        }

        for (value, _) in strings {
            if let Some(value) = value {
                let units: Vec<u16> = value.encode_utf16().collect();
                out.extend_from_slice(&u16::try_from(units.len()).unwrap().to_le_bytes());
                for unit in units {
                    out.extend_from_slice(&unit.to_le_bytes());
                }
            }
        }

        if let Some(target) = self.environment_target {
            out.extend_from_slice(&0x314u32.to_le_bytes());
            out.extend_from_slice(&ENVIRONMENT_BLOCK_SIGNATURE.to_le_bytes());
            let mut ansi = target.as_bytes().to_vec();
            ansi.resize(260, 0);
            out.extend_from_slice(&ansi);
            let mut wide: Vec<u8> = target.encode_utf16().flat_map(u16::to_le_bytes).collect();
            wide.resize(520, 0);
            out.extend_from_slice(&wide);
        }

        // TerminalBlock
        out.extend_from_slice(&0u32.to_le_bytes());
        out
    }
}

fn u32_of(value: usize) -> [u8; 4] {
    u32::try_from(value).unwrap().to_le_bytes()
}

fn nul_terminated(bytes: &[u8]) -> Vec<u8> {
    let mut out = bytes.to_vec();
    out.push(0);
    out
}

fn local_link_info(base: &[u8]) -> Vec<u8> {
    const HEADER: usize = 0x1C;

    // VolumeID: size, drive type (fixed), serial, label offset, empty label
    let mut volume_id = Vec::new();
    volume_id.extend_from_slice(&0x11u32.to_le_bytes());
    volume_id.extend_from_slice(&3u32.to_le_bytes());
    volume_id.extend_from_slice(&0u32.to_le_bytes());
    volume_id.extend_from_slice(&0x10u32.to_le_bytes());
    volume_id.push(0);

    let base_offset = HEADER + volume_id.len();
    let base_bytes = nul_terminated(base);
    let suffix_offset = base_offset + base_bytes.len();

    let mut out = Vec::new();
    out.extend_from_slice(&u32_of(suffix_offset + 1));
    out.extend_from_slice(&u32_of(HEADER));
    out.extend_from_slice(&1u32.to_le_bytes());
    out.extend_from_slice(&u32_of(HEADER));
    out.extend_from_slice(&u32_of(base_offset));
    out.extend_from_slice(&0u32.to_le_bytes());
    out.extend_from_slice(&u32_of(suffix_offset));
    out.extend_from_slice(&volume_id);
    out.extend_from_slice(&base_bytes);
    out.push(0);
    out
}

fn network_link_info(share: &str, suffix: &str) -> Vec<u8> {
    const HEADER: usize = 0x1C;

    let share_bytes = nul_terminated(share.as_bytes());
    let mut network = Vec::new();
    network.extend_from_slice(&u32_of(0x14 + share_bytes.len()));
    network.extend_from_slice(&0u32.to_le_bytes());
    network.extend_from_slice(&0x14u32.to_le_bytes());
    network.extend_from_slice(&0u32.to_le_bytes());
    network.extend_from_slice(&0u32.to_le_bytes());
    network.extend_from_slice(&share_bytes);

    let suffix_offset = HEADER + network.len();
    let suffix_bytes = nul_terminated(suffix.as_bytes());

    let mut out = Vec::new();
    out.extend_from_slice(&u32_of(suffix_offset + suffix_bytes.len()));
    out.extend_from_slice(&u32_of(HEADER));
    out.extend_from_slice(&2u32.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes());
    out.extend_from_slice(&u32_of(HEADER));
    out.extend_from_slice(&u32_of(suffix_offset));
    out.extend_from_slice(&network);
    out.extend_from_slice(&suffix_bytes);
    out
}
