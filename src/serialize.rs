use serde::Serialize;

use crate::error::AnalysisError;

/// Render records as a JSON array of objects, one object per record in the given order.
pub fn to_json<R: Serialize>(records: &[R], pretty: bool) -> Result<String, AnalysisError> {
    let json = if pretty {
        serde_json::to_string_pretty(records)?
    } else {
        serde_json::to_string(records)?
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use crate::bowling::BowlingRecord;
    use crate::error::AnalysisError;
    use crate::serialize::to_json;

    fn bowler(player: &str, economy: f64) -> BowlingRecord {
        BowlingRecord {
            position: "1".to_string(),
            player: player.to_string(),
            matches: 4,
            innings: 4,
            overs: 5.0,
            runs: 24,
            wickets: 0,
            best_bowling: "-".to_string(),
            average: 0.0,
            economy,
            strike_rate: 0.0,
            four_wickets: 0,
            five_wickets: 0,
        }
    }

    #[test]
    fn test_field_names() -> Result<(), AnalysisError> {
        let json = to_json(&[bowler("Shivam Dube", 4.8)], false)?;
        let value: Value = serde_json::from_str(&json)?;
        let object = &value[0];
        assert_eq!(object["player"], "Shivam Dube");
        assert_eq!(object["economy"], 4.8);
        assert_eq!(object["best_bowling"], "-");
        assert_eq!(object["four_wickets"], 0);
        Ok(())
    }

    #[test]
    fn test_order_is_kept() -> Result<(), AnalysisError> {
        let records = vec![bowler("Y", 4.8), bowler("X", 9.0)];
        let json = to_json(&records, true)?;
        assert!(json.contains('\n'));
        let read: Vec<BowlingRecord> = serde_json::from_str(&json)?;
        assert_eq!(read, records);
        Ok(())
    }

    #[test]
    fn test_empty() -> Result<(), AnalysisError> {
        assert_eq!(to_json::<BowlingRecord>(&[], false)?, "[]");
        Ok(())
    }
}
