fn main() {
    // Capture the current timestamp as the build time
    let build_time = chrono::Utc::now().to_rfc3339();

    // Also set as environment variable for use in env! macro
    println!("cargo:rustc-env=BUILD_TIME={}", build_time);

    // Site identity and endpoints are baked in with option_env!
    for var in [
        "PORTFOLIO_OWNER",
        "PORTFOLIO_EMAIL",
        "PORTFOLIO_LINKEDIN_URL",
        "PORTFOLIO_SUBMIT_URL",
    ] {
        println!("cargo:rerun-if-env-changed={}", var);
    }

    // Rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
