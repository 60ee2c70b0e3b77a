use std::collections::HashSet;
use std::path::Path;

fn main() {
    let table_path = Path::new("catalogs/spanish_frequencies.json");
    validate_table_file(table_path);
    set_build_dependencies();
}

fn validate_table_file(table_path: &Path) {
    // Ensure the reference table exists at build time
    assert!(
        table_path.exists(),
        "\n\nTABLE BUILD ERROR: File not found\n\
         Path: {}\n\
         Please create the reference table before building.\n",
        table_path.display()
    );

    let table_contents = std::fs::read_to_string(table_path).unwrap_or_else(|e| {
        panic!(
            "\n\nTABLE BUILD ERROR: Failed to read file\n\
             Path: {}\n\
             Error: {e}\n",
            table_path.display()
        );
    });

    let table: serde_json::Value = serde_json::from_str(&table_contents).unwrap_or_else(|e| {
        panic!(
            "\n\nTABLE BUILD ERROR: Invalid JSON\n\
             Path: {}\n\
             Error: {e}\n\
             Hint: Check for missing commas, brackets, or invalid syntax.\n",
            table_path.display()
        );
    });

    validate_table_structure(&table);
}

fn validate_table_structure(table: &serde_json::Value) {
    assert!(
        table.is_object(),
        "\n\nTABLE BUILD ERROR: Root must be a JSON object\n\
         Got: {table}\n"
    );

    let letters = table.get("letters").unwrap_or_else(|| {
        panic!(
            "\n\nTABLE BUILD ERROR: Missing 'letters' field\n\
             The table must have a top-level 'letters' array.\n"
        );
    });

    let entries = letters.as_array().unwrap_or_else(|| {
        panic!(
            "\n\nTABLE BUILD ERROR: 'letters' must be an array\n\
             Got: {letters}\n"
        );
    });

    let total = validate_entries(entries);

    println!(
        "cargo:warning=Validated reference table: {} letters, {total:.3}% total",
        entries.len()
    );
}

fn validate_entries(entries: &[serde_json::Value]) -> f64 {
    let mut seen = HashSet::new();
    let mut total = 0.0;

    for (i, entry) in entries.iter().enumerate() {
        let letter = entry
            .get("letter")
            .and_then(|v| v.as_str())
            .unwrap_or_else(|| {
                panic!("\n\nTABLE BUILD ERROR: Entry at index {i} missing 'letter' field\n")
            });

        let mut chars = letter.chars();
        let symbol = match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_uppercase() => c,
            _ => panic!(
                "\n\nTABLE BUILD ERROR: Entry at index {i} has invalid letter '{letter}'\n\
                 Letters must be a single uppercase character.\n"
            ),
        };

        assert!(
            seen.insert(symbol),
            "\n\nTABLE BUILD ERROR: Letter '{symbol}' appears more than once\n"
        );

        let frequency = entry
            .get("frequency")
            .and_then(serde_json::Value::as_f64)
            .unwrap_or_else(|| {
                panic!("\n\nTABLE BUILD ERROR: Letter '{symbol}' missing numeric 'frequency'\n")
            });

        assert!(
            frequency.is_finite() && frequency >= 0.0,
            "\n\nTABLE BUILD ERROR: Letter '{symbol}' has invalid frequency {frequency}\n\
             Frequencies must be non-negative percentages.\n"
        );

        total += frequency;
    }

    total
}

fn set_build_dependencies() {
    // Tell cargo to rerun if the table changes
    println!("cargo:rerun-if-changed=catalogs/spanish_frequencies.json");

    // Tell cargo to rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
