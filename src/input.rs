use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    decode::{parse_in_base, DecodeError},
    rec::{check_params, direct::Reconstruction, point::Point, RecError},
    traits::WithVars,
};

/// Share document
///
/// ```json
/// {
///   "keys": { "n": 4, "k": 3 },
///   "1": { "base": "10", "value": "4" },
///   "2": { "base": "2", "value": "111" }
/// }
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize)]
pub struct ShareDoc {
    pub keys: Keys,
    #[serde(flatten)]
    pub shares: BTreeMap<String, RawShare>,
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Deserialize)]
pub struct Keys {
    pub n: i64,
    pub k: i64,
}

/// A share with its value written in some base
#[derive(Clone, Debug, Eq, PartialEq, Deserialize)]
pub struct RawShare {
    pub base: NumOrStr,
    pub value: NumOrStr,
}

#[derive(Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum NumOrStr {
    Num(u64),
    Str(String),
}

impl NumOrStr {
    fn to_text(&self) -> String {
        match self {
            NumOrStr::Num(n) => n.to_string(),
            NumOrStr::Str(s) => s.clone(),
        }
    }
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("Failed to parse share document")]
    Json(#[from] serde_json::Error),
    #[error("Invalid share index '{0}'")]
    InvalidX(String),
    #[error("Invalid base '{base}' for share {x}")]
    InvalidBase { x: i64, base: String },
    #[error("Failed to decode share {x}")]
    Decode {
        x: i64,
        #[source]
        source: DecodeError,
    },
    #[error(transparent)]
    Params(#[from] RecError),
}

impl ShareDoc {
    pub fn from_json(s: &str) -> Result<Self, InputError> {
        Ok(serde_json::from_str(s)?)
    }

    /// `(n, k)` after checking `1 <= k <= n`
    pub fn params(&self) -> Result<(usize, usize), InputError> {
        let Keys { n, k } = self.keys;
        let (Ok(n), Ok(k)) = (usize::try_from(n), usize::try_from(k)) else {
            return Err(RecError::InvalidParameters { n, k }.into());
        };
        check_params(n, k)?;
        Ok((n, k))
    }

    /// All shares as points, sorted by `x`
    pub fn points(&self) -> Result<Vec<Point>, InputError> {
        let mut pts = Vec::with_capacity(self.shares.len());
        for (key, share) in &self.shares {
            let x: i64 = key
                .trim()
                .parse()
                .map_err(|_| InputError::InvalidX(key.clone()))?;
            let base = share.base.to_text();
            let base_num = base
                .trim()
                .parse()
                .map_err(|_| InputError::InvalidBase { x, base })?;
            let y = parse_in_base(&share.value.to_text(), base_num)
                .map_err(|source| InputError::Decode { x, source })?;
            pts.push(Point::new(x, y));
        }
        pts.sort_by_key(|pt| pt.x);
        Ok(pts)
    }
}

/// Output of direct reconstruction
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct DirectOutput {
    pub degree: usize,
    pub used_points: Vec<UsedPoint>,
    pub coefficients_asc: Vec<String>,
    pub pretty: String,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct UsedPoint {
    pub x: i64,
    pub y: String,
}

impl From<&Reconstruction> for DirectOutput {
    fn from(rec: &Reconstruction) -> Self {
        Self {
            degree: rec.degree(),
            used_points: rec
                .used
                .iter()
                .map(|pt| UsedPoint {
                    x: pt.x,
                    y: pt.y.to_string(),
                })
                .collect(),
            coefficients_asc: rec
                .poly
                .coeff()
                .iter()
                .map(|c| c.to_string())
                .collect(),
            pretty: rec.poly.with_vars(&["x"]).to_string(),
        }
    }
}
