/// Placeholder arrival estimate in minutes, always within 2..=16.
///
/// Sums the UTF-16 code units of the bus number, so the same number always
/// gets the same estimate. It has no relation to where the bus actually is.
// TODO: replace with an estimate from live positions once buses report telemetry
pub fn estimate_eta_minutes(bus_number: &str) -> u32 {
    let seed: u64 = bus_number.encode_utf16().map(u64::from).sum();
    (seed % 15) as u32 + 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_estimates() {
        assert_eq!(estimate_eta_minutes("KL-07-101"), 12);
        assert_eq!(estimate_eta_minutes("KL-07-202"), 14);
        assert_eq!(estimate_eta_minutes("KL-07-303"), 16);
        assert_eq!(estimate_eta_minutes(""), 2);
    }

    #[test]
    fn test_estimate_is_deterministic() {
        let first = estimate_eta_minutes("KL-07-101");
        let second = estimate_eta_minutes("KL-07-101");
        assert_eq!(first, second);
    }

    #[test]
    fn test_estimate_range() {
        let long = "x".repeat(500);
        for number in ["A", "KL-07-404", "TN 22 AB 1234", "കൊച്ചി-1", "🚌", long.as_str()] {
            let eta = estimate_eta_minutes(number);
            assert!((2..=16).contains(&eta), "{number} -> {eta}");
        }
    }
}
