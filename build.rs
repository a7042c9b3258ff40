use std::env;
use std::fs;
use std::path::Path;

/// Variables que el frontend lee con `option_env!` (ver src/config.rs)
const FORWARDED_VARS: &[&str] = &[
    "BACKEND_URL",
    "ENVIRONMENT",
    "ENABLE_LOGGING",
    "ITEMS_PER_PAGE",
    "CHECK_IN_RESULT_SECONDS",
];

fn main() {
    for var in FORWARDED_VARS {
        println!("cargo:rerun-if-env-changed={}", var);
    }
    println!("cargo:rerun-if-changed=build.rs");

    let env_file = Path::new(".env");
    if !env_file.exists() {
        println!("cargo:warning=Sin archivo .env, se usan los valores por defecto de config.rs");
        return;
    }
    println!("cargo:rerun-if-changed=.env");

    let contents = match fs::read_to_string(env_file) {
        Ok(c) => c,
        Err(e) => {
            println!("cargo:warning=No se pudo leer .env: {}", e);
            return;
        }
    };

    for line in contents.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        let value = value.trim().trim_matches('"');

        // Lo definido en el entorno del build tiene prioridad sobre .env
        if FORWARDED_VARS.contains(&key) && env::var(key).is_err() {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }
}
