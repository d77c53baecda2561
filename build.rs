use chrono::{DateTime, Utc};

// EmailJS settings are baked in with option_env!, so a change must rebuild.
const EMAILJS_VARS: [&str; 4] = [
    "EMAILJS_ENDPOINT",
    "EMAILJS_PUBLIC_KEY",
    "EMAILJS_SERVICE_ID",
    "EMAILJS_TEMPLATE_ID",
];

fn main() {
    // Honour SOURCE_DATE_EPOCH so reproducible builds stamp a fixed date
    let build_time = std::env::var("SOURCE_DATE_EPOCH")
        .ok()
        .and_then(|secs| secs.parse::<i64>().ok())
        .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0))
        .unwrap_or_else(Utc::now);

    // Read by the footer through env!
    println!("cargo:rustc-env=BUILD_TIME={}", build_time.to_rfc3339());

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=SOURCE_DATE_EPOCH");
    for var in EMAILJS_VARS {
        println!("cargo:rerun-if-env-changed={var}");
    }
}
