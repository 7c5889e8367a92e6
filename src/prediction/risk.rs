use super::{Feature, FeatureRecord};
use serde::{Deserialize, Serialize};

pub const MEDIUM_RISK_THRESHOLD: f64 = 0.3;
pub const HIGH_RISK_THRESHOLD: f64 = 0.7;
pub const DIABETIC_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    #[serde(rename = "Rendah")]
    Low,
    #[serde(rename = "Sedang")]
    Medium,
    #[serde(rename = "Tinggi")]
    High,
}

impl RiskLevel {
    pub fn from_probability(probability: f64) -> Self {
        if probability < MEDIUM_RISK_THRESHOLD {
            Self::Low
        } else if probability < HIGH_RISK_THRESHOLD {
            Self::Medium
        } else {
            Self::High
        }
    }

    fn advice(self) -> &'static [&'static str] {
        match self {
            Self::Low => &[
                "Bagus! Pertahankan gaya hidup sehat Anda dengan olahraga teratur dan pola makan seimbang.",
                "Lakukan pemeriksaan gula darah secara rutin setidaknya setahun sekali sebagai langkah pencegahan.",
            ],
            Self::Medium => &[
                "Segera konsultasikan dengan dokter untuk pemeriksaan dan saran lebih lanjut.",
                "Tingkatkan aktivitas fisik Anda, targetkan minimal 150 menit per minggu (contoh: jalan cepat, bersepeda).",
                "Kurangi konsumsi makanan dan minuman dengan indeks glikemik tinggi seperti nasi putih, roti tawar, dan minuman manis.",
            ],
            Self::High => &[
                "Sangat disarankan untuk segera menemui dokter untuk diagnosis medis yang akurat dan penanganan lebih lanjut.",
                "Penting untuk memantau kadar gula darah Anda secara teratur sesuai anjuran dokter.",
                "Ikuti program diet dan olahraga yang dirancang khusus oleh ahli kesehatan atau ahli gizi.",
            ],
        }
    }
}

/// Field-specific advice, checked in order after the tier advice.
const SUPPLEMENTARY_RULES: [(Feature, f64, &str); 3] = [
    (
        Feature::Glucose,
        140.0,
        "Perhatian khusus pada kadar glukosa Anda yang tinggi. Batasi asupan gula dan karbohidrat sederhana secara signifikan.",
    ),
    (
        Feature::Bmi,
        30.0,
        "BMI Anda berada dalam kategori obesitas, yang merupakan faktor risiko utama. Pertimbangkan untuk mengikuti program penurunan berat badan yang sehat dan terstruktur.",
    ),
    (
        Feature::Age,
        45.0,
        "Mengingat usia Anda, risiko diabetes secara alami meningkat. Pastikan untuk melakukan pemeriksaan kesehatan (medical check-up) secara rutin.",
    ),
];

pub fn is_diabetic(probability: f64) -> bool {
    probability >= DIABETIC_THRESHOLD
}

pub fn assess(probability: f64, record: &FeatureRecord) -> (RiskLevel, Vec<String>) {
    let risk_level = RiskLevel::from_probability(probability);

    let mut recommendations: Vec<String> = risk_level
        .advice()
        .iter()
        .map(|s| s.to_string())
        .collect();

    recommendations.extend(
        SUPPLEMENTARY_RULES
            .iter()
            .filter(|(feature, threshold, _)| record.get(*feature) > *threshold)
            .map(|(_, _, advice)| advice.to_string()),
    );

    (risk_level, recommendations)
}
