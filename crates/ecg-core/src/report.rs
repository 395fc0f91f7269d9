//! Prediction results, label mapping, guidance text, and output formatting.

use serde::{Serialize, Serializer};

/// Binary class label. Class 0 is always Normal, class 1 always Abnormal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    Normal,
    Abnormal,
}

impl Label {
    pub fn from_class(class: usize) -> Self {
        if class == 0 {
            Label::Normal
        } else {
            Label::Abnormal
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Label::Normal => "Normal",
            Label::Abnormal => "Abnormal (Arrhythmia)",
        }
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Label {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// The headline outcome for one upload.
#[derive(Debug, Clone, Serialize)]
pub struct PredictionResult {
    pub label: Label,
    /// Probability mass of the predicted class, as a percentage in [0, 100].
    pub confidence: f32,
}

impl PredictionResult {
    /// Map a two-class probability vector to label and confidence.
    ///
    /// Ties go to class 0, matching argmax order.
    pub fn from_proba(proba: [f32; 2]) -> Self {
        let class = usize::from(proba[1] > proba[0]);
        Self {
            label: Label::from_class(class),
            confidence: proba[class] * 100.0,
        }
    }
}

/// One classified row from the uploaded table. Row numbers are 1-based.
#[derive(Debug, Clone, Serialize)]
pub struct RowPrediction {
    pub row: usize,
    pub label: Label,
    pub confidence: f32,
}

impl From<&RowPrediction> for PredictionResult {
    fn from(r: &RowPrediction) -> Self {
        Self {
            label: r.label,
            confidence: r.confidence,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {s}. Use 'text' or 'json'.")),
        }
    }
}

const NORMAL_GUIDANCE: &str = "\
What does this mean?

Normal: the ECG data is classified as normal, indicating that the heart
rhythm appears to be regular. A normal ECG shows a consistent rhythm and
rate, with the heart beating at a regular interval.

Note: while a normal ECG is a positive sign, this tool provides information
only and not a professional medical opinion. If you have any concerns or
symptoms, please consult a healthcare professional for a comprehensive
evaluation.";

const ABNORMAL_GUIDANCE: &str = "\
What does this mean?

Abnormal (Arrhythmia): the ECG data is classified as abnormal, indicating
that there may be irregularities in the heart rhythm. Arrhythmia refers to
an irregular heart rhythm, which can be too fast, too slow, or erratic. It
is important to consult a healthcare professional for a detailed assessment
and diagnosis.

Disclaimer: this tool provides information only and is not a substitute for
professional medical advice, diagnosis, or treatment. Always seek the advice
of your physician or other qualified health provider with any questions you
may have regarding a medical condition.";

/// Static explanatory template for the given label.
pub fn guidance(label: Label) -> &'static str {
    match label {
        Label::Normal => NORMAL_GUIDANCE,
        Label::Abnormal => ABNORMAL_GUIDANCE,
    }
}

pub fn print_results(rows: &[RowPrediction], format: OutputFormat) {
    match format {
        OutputFormat::Text => print_text(rows),
        OutputFormat::Json => print_json(rows),
    }
}

fn print_text(rows: &[RowPrediction]) {
    let Some(headline) = rows.first() else {
        return;
    };

    println!("\n{}", "=".repeat(70));
    println!("PREDICTION RESULT");
    println!("{}", "=".repeat(70));

    println!(
        "\n  {}  ({:.2}% confidence)",
        headline.label, headline.confidence
    );
    println!("\n{}", guidance(headline.label));

    if rows.len() > 1 {
        println!("\nPER-ROW RESULTS ({}):", rows.len());
        for r in rows {
            println!("  [{:6.2}%] row {:>4}  {}", r.confidence, r.row, r.label);
        }
    }

    let abnormal = rows.iter().filter(|r| r.label == Label::Abnormal).count();
    println!("\nSUMMARY:");
    println!("  Total rows classified: {}", rows.len());
    println!("  Normal:                {}", rows.len() - abnormal);
    println!("  Abnormal:              {abnormal}");
    println!("{}", "=".repeat(70));
}

fn print_json(rows: &[RowPrediction]) {
    let headline = rows.first().map(PredictionResult::from);
    let abnormal = rows.iter().filter(|r| r.label == Label::Abnormal).count();
    let output = serde_json::json!({
        "prediction": headline,
        "rows": rows,
        "summary": {
            "total": rows.len(),
            "normal": rows.len() - abnormal,
            "abnormal": abnormal,
        }
    });
    println!("{}", serde_json::to_string_pretty(&output).unwrap_or_default());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_zero_is_normal_class_one_is_abnormal() {
        assert_eq!(Label::from_class(0), Label::Normal);
        assert_eq!(Label::from_class(1), Label::Abnormal);
        assert_eq!(Label::Normal.as_str(), "Normal");
        assert_eq!(Label::Abnormal.as_str(), "Abnormal (Arrhythmia)");
    }

    #[test]
    fn confident_abnormal_vector_maps_to_abnormal() {
        let result = PredictionResult::from_proba([0.05, 0.95]);
        assert_eq!(result.label, Label::Abnormal);
        assert_eq!(format!("{:.2}%", result.confidence), "95.00%");
    }

    #[test]
    fn confident_normal_vector_maps_to_normal() {
        let result = PredictionResult::from_proba([0.7, 0.3]);
        assert_eq!(result.label, Label::Normal);
        assert!((result.confidence - 70.0).abs() < 1e-4);
    }

    #[test]
    fn tie_goes_to_normal() {
        let result = PredictionResult::from_proba([0.5, 0.5]);
        assert_eq!(result.label, Label::Normal);
    }

    #[test]
    fn confidence_stays_in_percentage_range() {
        for p in [0.0f32, 0.1, 0.5, 0.73, 0.999, 1.0] {
            let result = PredictionResult::from_proba([1.0 - p, p]);
            assert!(result.confidence >= 0.0 && result.confidence <= 100.0);
        }
    }

    #[test]
    fn label_serializes_as_display_string() {
        let value = serde_json::to_value(Label::Abnormal).unwrap();
        assert_eq!(value, serde_json::json!("Abnormal (Arrhythmia)"));
    }

    #[test]
    fn guidance_templates_match_their_label() {
        assert!(guidance(Label::Normal).contains("regular"));
        assert!(guidance(Label::Abnormal).contains("Arrhythmia"));
        assert!(guidance(Label::Normal).contains("healthcare professional"));
        assert!(guidance(Label::Abnormal).contains("not a substitute"));
    }

    #[test]
    fn output_format_parses_case_insensitively() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
