use std::env;

fn main() {
    // Device UID (optional, decimal)
    // Falls back to the built-in UID when unset or not a number
    if let Ok(uid) = env::var("DUAL_AC_IN_UID") {
        println!("cargo:rustc-env=DUAL_AC_IN_UID={}", uid);
        println!("cargo:warning=Using DUAL_AC_IN_UID from environment: {}", uid);
    } else {
        println!("cargo:rustc-env=DUAL_AC_IN_UID=");
    }

    // Rerun if environment variables change
    println!("cargo:rerun-if-env-changed=DUAL_AC_IN_UID");
}
