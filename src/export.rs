//! Text export of microphone positions.
//!
//! The numpy literal is meant to be pasted straight into a Python session, so
//! its layout is fixed down to the whitespace:
//!
//! ```text
//! np.array([
//!   [1.2345, 6.7890],
//!   [2.3456, 7.8901]
//! ])
//! ```

use crate::constants::EXPORT_PRECISION;
use crate::types::Microphone;

/// Available export formats
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Numpy,
    Json,
}

impl ExportFormat {
    pub fn render(&self, mics: &[Microphone]) -> Result<String, serde_json::Error> {
        match self {
            ExportFormat::Numpy => Ok(numpy_array(mics)),
            ExportFormat::Json => json_array(mics),
        }
    }
}

/// Format microphones as a `np.array([...])` literal, one `[x, y]` row per line.
///
/// An empty collection keeps the wrapper and the indented empty body line.
pub fn numpy_array(mics: &[Microphone]) -> String {
    let rows: Vec<String> = mics
        .iter()
        .map(|mic| format!("[{}, {}]", to_fixed(mic.x), to_fixed(mic.y)))
        .collect();
    format!("np.array([\n  {}\n])", rows.join(",\n  "))
}

/// Pretty JSON array of `{"id", "x", "y"}` objects
pub fn json_array(mics: &[Microphone]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(mics)
}

/// Hover label, e.g. `(1.5000m, -0.2500m)`
pub fn tooltip_label(mic: &Microphone) -> String {
    format!("({}m, {}m)", to_fixed(mic.x), to_fixed(mic.y))
}

/// Fixed-point formatting with [`EXPORT_PRECISION`] decimals.
///
/// Exact ties round away from zero (`0.03125` becomes `0.0313`) and `-0.0`
/// prints as `0.0000`.
pub fn to_fixed(value: f64) -> String {
    if value == 0.0 {
        return format!("{:.*}", EXPORT_PRECISION, 0.0);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let abs = value.abs();

    // `{:.N}` rounds exact ties half-to-even; round those up by hand instead.
    let digits = if is_exact_tie(abs) {
        let extended = format!("{:.*}", EXPORT_PRECISION + 1, abs);
        increment_last_digit(&extended[..extended.len() - 1])
    } else {
        format!("{:.*}", EXPORT_PRECISION, abs)
    };

    format!("{sign}{digits}")
}

/// Whether `value` sits exactly halfway between two [`EXPORT_PRECISION`]-decimal numbers
fn is_exact_tie(value: f64) -> bool {
    // A tie has exactly EXPORT_PRECISION + 1 decimals ending in 5. Binary
    // fractions that terminate that early are multiples of 2^-(EXPORT_PRECISION + 1),
    // and the scaling below is exact for them.
    let scale = f64::from(1u32 << (EXPORT_PRECISION + 1));
    let scaled = value * scale;
    scaled.fract() == 0.0 && format!("{:.*}", EXPORT_PRECISION + 1, value).ends_with('5')
}

/// Add one unit in the last place of a non-negative decimal string
fn increment_last_digit(text: &str) -> String {
    let mut bytes = text.as_bytes().to_vec();
    let mut carry = true;
    for b in bytes.iter_mut().rev() {
        if !carry {
            break;
        }
        match *b {
            b'.' => continue,
            b'9' => *b = b'0',
            _ => {
                *b += 1;
                carry = false;
            }
        }
    }
    let mut out = String::from_utf8_lossy(&bytes).into_owned();
    if carry {
        out.insert(0, '1');
    }
    out
}
