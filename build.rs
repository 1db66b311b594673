fn main() {
    // The backend base URL is baked into the bundle at compile time, so a
    // changed value has to force a recompile.
    println!("cargo:rerun-if-env-changed=VIDGRAB_BACKEND_API");
}
