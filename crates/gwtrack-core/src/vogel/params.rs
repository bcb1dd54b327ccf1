/// Vogel model aquifer parameters.
///
/// Three values describe the steady flow field:
/// - `thickness`: average saturated thickness D [m]
/// - `porosity`: effective porosity n0 [-], as a fraction
/// - `recharge`: steady areal recharge q [m/yr]
use super::constants::PERCENT_TO_FRACTION;

#[derive(Debug, Clone, Copy)]
pub struct Parameters {
    pub thickness: f64,
    pub porosity: f64,
    pub recharge: f64,
}

impl Parameters {
    /// Create new Parameters, rejecting values that leave the flow field
    /// undefined (the trajectory exponent divides by `thickness * porosity`).
    pub fn new(thickness: f64, porosity: f64, recharge: f64) -> Result<Self, String> {
        if !thickness.is_finite() || thickness <= 0.0 {
            return Err(format!(
                "thickness = {thickness} must be positive and finite"
            ));
        }
        if !porosity.is_finite() || porosity <= 0.0 || porosity > 1.0 {
            return Err(format!(
                "porosity = {porosity} must be a fraction in (0, 1]"
            ));
        }
        if !recharge.is_finite() || recharge < 0.0 {
            return Err(format!(
                "recharge = {recharge} must be non-negative and finite"
            ));
        }
        Ok(Self {
            thickness,
            porosity,
            recharge,
        })
    }

    /// Create Parameters from a porosity given in percent (the UI unit).
    pub fn from_percent_porosity(
        thickness: f64,
        porosity_pct: f64,
        recharge: f64,
    ) -> Result<Self, String> {
        Self::new(thickness, porosity_pct * PERCENT_TO_FRACTION, recharge)
    }

    /// Characteristic time constant D·n0/q [yr].
    ///
    /// Both trajectory equations are exponentials in t over this constant.
    /// Infinite when recharge is zero (a stagnant particle).
    pub fn turnover_time(&self) -> f64 {
        if self.recharge == 0.0 {
            f64::INFINITY
        } else {
            self.thickness * self.porosity / self.recharge
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_parameters() {
        let p = Parameters::new(30.0, 0.2, 0.2).unwrap();
        assert_eq!(p.thickness, 30.0);
        assert_eq!(p.porosity, 0.2);
        assert_eq!(p.recharge, 0.2);
    }

    #[test]
    fn zero_thickness_rejected() {
        let err = Parameters::new(0.0, 0.2, 0.2).unwrap_err();
        assert!(err.contains("thickness"));
    }

    #[test]
    fn negative_thickness_rejected() {
        assert!(Parameters::new(-5.0, 0.2, 0.2).is_err());
    }

    #[test]
    fn zero_porosity_rejected() {
        let err = Parameters::new(30.0, 0.0, 0.2).unwrap_err();
        assert!(err.contains("porosity"));
    }

    #[test]
    fn porosity_above_one_rejected() {
        // A percent value passed where a fraction belongs.
        assert!(Parameters::new(30.0, 20.0, 0.2).is_err());
    }

    #[test]
    fn porosity_of_exactly_one_is_valid() {
        assert!(Parameters::new(30.0, 1.0, 0.2).is_ok());
    }

    #[test]
    fn negative_recharge_rejected() {
        assert!(Parameters::new(30.0, 0.2, -0.1).is_err());
    }

    #[test]
    fn zero_recharge_is_valid() {
        assert!(Parameters::new(30.0, 0.2, 0.0).is_ok());
    }

    #[test]
    fn nan_values_rejected() {
        assert!(Parameters::new(f64::NAN, 0.2, 0.2).is_err());
        assert!(Parameters::new(30.0, f64::NAN, 0.2).is_err());
        assert!(Parameters::new(30.0, 0.2, f64::NAN).is_err());
        assert!(Parameters::new(f64::INFINITY, 0.2, 0.2).is_err());
    }

    #[test]
    fn percent_porosity_conversion() {
        let p = Parameters::from_percent_porosity(30.0, 20.0, 0.2).unwrap();
        assert_eq!(p.porosity, 0.2);
    }

    #[test]
    fn percent_porosity_out_of_range_rejected() {
        // 150 % converts to 1.5, above the fraction ceiling.
        assert!(Parameters::from_percent_porosity(30.0, 150.0, 0.2).is_err());
    }

    #[test]
    fn turnover_time_known_value() {
        // D·n0/q = 30 * 0.2 / 0.2 = 30 years
        let p = Parameters::new(30.0, 0.2, 0.2).unwrap();
        assert_eq!(p.turnover_time(), 30.0);
    }

    #[test]
    fn turnover_time_infinite_without_recharge() {
        let p = Parameters::new(30.0, 0.2, 0.0).unwrap();
        assert!(p.turnover_time().is_infinite());
    }
}
