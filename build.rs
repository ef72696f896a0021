fn main() {
    // Compile Slint UI files
    slint_build::compile("ui/main.slint").unwrap();

    // Embed Windows resources (version info)
    #[cfg(windows)]
    {
        let mut res = winres::WindowsResource::new();
        res.set("ProductName", "Folder Launcher");
        res.set(
            "FileDescription",
            "Launch applications, shortcuts and media from a folder",
        );
        res.set("CompanyName", "Folder Launcher Contributors");
        res.set("OriginalFilename", "folder-launcher.exe");
        res.set("FileVersion", env!("CARGO_PKG_VERSION"));
        res.set("ProductVersion", env!("CARGO_PKG_VERSION"));
        res.compile().unwrap();
    }
}
