use rand::Rng;

/// Stand-in for a real risk engine.
pub fn random_rating() -> u8 {
    rand::thread_rng().gen_range(0..100)
}

pub fn random_threat_level() -> u8 {
    // Low range keeps the demo assessment reassuring.
    rand::thread_rng().gen_range(0..25)
}

pub fn circle_color(rating: u8) -> &'static str {
    if rating >= 80 {
        "#22c55e"
    } else if rating >= 60 {
        "#eab308"
    } else {
        "#ef4444"
    }
}

pub fn band_label(rating: u8) -> &'static str {
    if rating >= 80 {
        "Very Safe Area"
    } else if rating >= 60 {
        "Relatively Safe"
    } else {
        "Exercise Caution"
    }
}

pub fn band_summary(rating: u8) -> &'static str {
    if rating >= 80 {
        "High safety rating based on recent data"
    } else if rating >= 60 {
        "Moderate safety with some concerns"
    } else {
        "Lower than average safety rating"
    }
}

pub fn threat_status(level: u8) -> &'static str {
    if level < 30 {
        "Low Risk"
    } else if level < 70 {
        "Moderate Risk"
    } else {
        "High Risk"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_bands_split_at_80_and_60() {
        assert_eq!(band_label(80), "Very Safe Area");
        assert_eq!(band_label(79), "Relatively Safe");
        assert_eq!(band_label(60), "Relatively Safe");
        assert_eq!(band_label(59), "Exercise Caution");
    }

    #[test]
    fn colors_follow_the_same_thresholds() {
        assert_eq!(circle_color(92), "#22c55e");
        assert_eq!(circle_color(72), "#eab308");
        assert_eq!(circle_color(12), "#ef4444");
    }

    #[test]
    fn threat_bands_split_at_30_and_70() {
        assert_eq!(threat_status(29), "Low Risk");
        assert_eq!(threat_status(30), "Moderate Risk");
        assert_eq!(threat_status(69), "Moderate Risk");
        assert_eq!(threat_status(70), "High Risk");
    }

    #[test]
    fn simulated_values_stay_in_range() {
        for _ in 0..100 {
            assert!(random_rating() < 100);
            assert!(random_threat_level() < 25);
        }
    }
}
