// File: crates/graph-core/build.rs
// Summary: Link the Windows system libraries Skia's font manager and ICU need for the raster surface.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // RegOpenKeyExW and friends, used by Skia's font lookup.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
