use std::fs;

const CONFIG_PATH: &str = "src/default_config.toml";

fn main() {
    println!("cargo:rerun-if-changed={CONFIG_PATH}");

    let content = fs::read_to_string(CONFIG_PATH).expect("Failed to read default_config.toml");

    let table = match content.parse::<toml::Table>() {
        Ok(table) => table,
        Err(e) => panic!("Invalid default_config.toml: {e}"),
    };

    // The embedded defaults fall back silently at runtime, so catch typos here.
    let Some(render) = table.get("render").and_then(toml::Value::as_table) else {
        panic!("default_config.toml is missing the [render] section");
    };
    match render.get("theme").and_then(toml::Value::as_str) {
        Some("light" | "dark") | None => {}
        Some(other) => panic!("default_config.toml: unknown theme {other:?}"),
    }
    if let Some(value) = render.get("highlight") {
        assert!(
            value.is_bool(),
            "default_config.toml: render.highlight must be a boolean"
        );
    }
}
