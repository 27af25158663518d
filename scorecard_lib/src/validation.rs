use crate::error::ScorecardError;

pub const MAX_NAME_LENGTH: usize = 100;

/// FEC office codes: House, Senate, President.
pub const VALID_OFFICES: &[&str] = &["H", "S", "P"];

/// Two-year election cycles accepted by the fetch layer.
pub const MIN_CYCLE: i32 = 1980;
pub const MAX_CYCLE: i32 = 2040;

/// Upper bound on receipt pages a single analysis may request.
pub const MAX_PAGE_CAP: u32 = 100;

/// Strip ASCII control characters, trim whitespace, and enforce a
/// byte-length limit. Rejects input that is empty after trimming.
pub fn sanitize_name(input: &str) -> Result<String, ScorecardError> {
    if input.len() > MAX_NAME_LENGTH {
        return Err(ScorecardError::InvalidInput(format!(
            "name exceeds maximum length of {} bytes",
            MAX_NAME_LENGTH
        )));
    }

    let cleaned: String = input.chars().filter(|c| !c.is_ascii_control()).collect();
    let trimmed = cleaned.trim();

    if trimmed.is_empty() {
        return Err(ScorecardError::InvalidInput(
            "name must not be empty".to_string(),
        ));
    }

    Ok(trimmed.to_string())
}

/// Cycles are even years; odd years are never a valid two-year period.
pub fn validate_cycle(cycle: i32) -> Result<i32, ScorecardError> {
    if !(MIN_CYCLE..=MAX_CYCLE).contains(&cycle) {
        return Err(ScorecardError::InvalidInput(format!(
            "cycle {} outside supported range {}-{}",
            cycle, MIN_CYCLE, MAX_CYCLE
        )));
    }
    if cycle % 2 != 0 {
        return Err(ScorecardError::InvalidInput(format!(
            "cycle {} is not an even year",
            cycle
        )));
    }
    Ok(cycle)
}

/// Normalize an office filter to its uppercase single-letter code.
pub fn validate_office(office: &str) -> Result<String, ScorecardError> {
    let code = office.trim().to_uppercase();
    if VALID_OFFICES.contains(&code.as_str()) {
        Ok(code)
    } else {
        Err(ScorecardError::InvalidInput(format!(
            "office must be one of H, S, P (got '{}')",
            office
        )))
    }
}

pub fn validate_max_pages(max_pages: u32) -> Result<u32, ScorecardError> {
    if (1..=MAX_PAGE_CAP).contains(&max_pages) {
        Ok(max_pages)
    } else {
        Err(ScorecardError::InvalidInput(format!(
            "max_pages must be between 1 and {}",
            MAX_PAGE_CAP
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_name_trims_and_strips_controls() {
        let name = sanitize_name("  Eliza\x07beth Warren\n").unwrap();
        assert_eq!(name, "Elizabeth Warren");
    }

    #[test]
    fn sanitize_name_rejects_empty() {
        assert!(sanitize_name("").is_err());
        assert!(sanitize_name("   ").is_err());
        assert!(sanitize_name("\x00\x01").is_err());
    }

    #[test]
    fn sanitize_name_rejects_oversized() {
        let long = "a".repeat(MAX_NAME_LENGTH + 1);
        assert!(sanitize_name(&long).is_err());
    }

    #[test]
    fn cycle_bounds_and_parity() {
        assert_eq!(validate_cycle(2026).unwrap(), 2026);
        assert!(validate_cycle(2025).is_err());
        assert!(validate_cycle(1978).is_err());
        assert!(validate_cycle(2042).is_err());
    }

    #[test]
    fn office_codes() {
        assert_eq!(validate_office("s").unwrap(), "S");
        assert_eq!(validate_office(" H ").unwrap(), "H");
        assert!(validate_office("G").is_err());
        assert!(validate_office("").is_err());
    }

    #[test]
    fn max_pages_bounds() {
        assert_eq!(validate_max_pages(10).unwrap(), 10);
        assert_eq!(validate_max_pages(1).unwrap(), 1);
        assert!(validate_max_pages(0).is_err());
        assert!(validate_max_pages(101).is_err());
    }
}
