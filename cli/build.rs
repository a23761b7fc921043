fn main() {
    let ver = std::env::var("VERSION").unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_string());
    let app_version = match std::env::var("GIT_REVISION") {
        Ok(rev) if !rev.is_empty() => format!("v{}-{}", ver, rev),
        _ => format!("v{}", ver),
    };
    println!("cargo:rustc-env=APP_VERSION={}", app_version);
    println!("cargo:rerun-if-env-changed=VERSION");
    println!("cargo:rerun-if-env-changed=GIT_REVISION");
}
