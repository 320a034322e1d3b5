use std::io::{self, Write};

use crate::stats::moments::Moments;

pub fn skew_label(skewness: f64) -> &'static str {
    if skewness > 0.0 {
        "right skewed"
    } else if skewness < 0.0 {
        "left skewed"
    } else {
        "not skewed"
    }
}

pub fn kurtosis_label(excess_kurtosis: f64) -> &'static str {
    if excess_kurtosis > 0.0 {
        "leptokurtic"
    } else if excess_kurtosis < 0.0 {
        "platykurtic"
    } else {
        "mesokurtic"
    }
}

/// Print the moments of `column` with a plain-language reading of their
/// shape. Writes nothing when any moment is absent.
pub fn write_moments<W: Write>(out: &mut W, moments: &Moments, column: &str) -> io::Result<()> {
    let Some((mean, std_dev, skew, kurt)) = moments.values() else {
        return Ok(());
    };

    writeln!(out, "For the attribute {column}:")?;
    writeln!(out, "Mean = {mean:.2}, Standard Deviation = {std_dev:.2},")?;
    writeln!(out, "Skewness = {skew:.2}, Excess Kurtosis = {kurt:.2}.")?;
    writeln!(
        out,
        "The data was {} and {}.",
        skew_label(skew),
        kurtosis_label(kurt)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.4, "right skewed")]
    #[case(-0.4, "left skewed")]
    #[case(0.0, "not skewed")]
    #[case(f64::NAN, "not skewed")]
    fn skew_labels(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(skew_label(value), expected);
    }

    #[rstest]
    #[case(1.2, "leptokurtic")]
    #[case(-1.2, "platykurtic")]
    #[case(0.0, "mesokurtic")]
    fn kurtosis_labels(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(kurtosis_label(value), expected);
    }

    #[test]
    fn symmetric_column_report() {
        let mut out = Vec::new();
        write_moments(&mut out, &Moments::of(&[1.0, 2.0, 3.0, 4.0, 5.0]), "vote_average").unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "For the attribute vote_average:\n\
             Mean = 3.00, Standard Deviation = 1.58,\n\
             Skewness = 0.00, Excess Kurtosis = -1.30.\n\
             The data was not skewed and platykurtic.\n"
        );
    }

    #[test]
    fn absent_moments_print_nothing() {
        let mut out = Vec::new();
        write_moments(&mut out, &Moments::absent(), "vote_average").unwrap();
        assert!(out.is_empty());
    }
}
