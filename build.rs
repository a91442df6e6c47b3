/// Expose the compilation target triple as an environment variable at build time.
///
/// `roster version` prints it via `env!("TARGET")`.
fn main() {
    println!(
        "cargo:rustc-env=TARGET={}",
        std::env::var("TARGET").unwrap()
    );
}
