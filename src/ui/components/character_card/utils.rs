/// Format a SWAPI mass for display: "77" becomes "77 kg", "unknown" stays as is
pub fn format_mass(mass: &str) -> String {
    let mass = mass.trim();
    if mass.is_empty() {
        return "unknown".to_string();
    }

    // SWAPI writes large masses with a thousands separator ("1,358")
    if mass.replace(',', "").parse::<f64>().is_ok() {
        format!("{} kg", mass)
    } else {
        mass.to_string()
    }
}

pub fn format_birth_year(birth_year: &str) -> String {
    match birth_year.trim() {
        "" => "unknown".to_string(),
        year => year.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_mass() {
        assert_eq!(format_mass("77"), "77 kg");
        assert_eq!(format_mass("78.2"), "78.2 kg");
        assert_eq!(format_mass("1,358"), "1,358 kg");
        assert_eq!(format_mass("unknown"), "unknown");
        assert_eq!(format_mass("  "), "unknown");
    }

    #[test]
    fn test_format_birth_year() {
        assert_eq!(format_birth_year("19BBY"), "19BBY");
        assert_eq!(format_birth_year(""), "unknown");
    }
}
