/// Volume label for a drive root such as `C:\`. `None` when the volume has no
/// label or the query fails.
#[cfg(windows)]
pub fn volume_label(mountpoint: &str) -> Option<String> {
    use windows_sys::Win32::Storage::FileSystem::GetVolumeInformationW;

    let mut root: Vec<u16> = mountpoint.encode_utf16().collect();
    if root.last() != Some(&(b'\\' as u16)) {
        root.push(b'\\' as u16);
    }
    root.push(0);

    let mut name = [0u16; 261];
    // SAFETY: `root` is NUL-terminated and `name` is a writable buffer of the
    // length we pass; the optional out-pointers are null.
    let ok = unsafe {
        GetVolumeInformationW(
            root.as_ptr(),
            name.as_mut_ptr(),
            name.len() as u32,
            std::ptr::null_mut(),
            std::ptr::null_mut(),
            std::ptr::null_mut(),
            std::ptr::null_mut(),
            0,
        )
    };
    if ok == 0 {
        log::debug!("GetVolumeInformationW failed for {}", mountpoint);
        return None;
    }

    let len = name.iter().position(|&c| c == 0).unwrap_or(name.len());
    non_blank(String::from_utf16_lossy(&name[..len]))
}

#[cfg(not(windows))]
pub fn volume_label(_mountpoint: &str) -> Option<String> {
    None
}

pub fn non_blank(s: String) -> Option<String> {
    let t = s.trim();
    if t.is_empty() { None } else { Some(t.to_string()) }
}
