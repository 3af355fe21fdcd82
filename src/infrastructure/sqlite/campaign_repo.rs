use crate::domain::entities::campaign::{Channel, LaunchedCampaign};
use crate::domain::error::DomainError;
use crate::domain::ports::campaign_repository::*;
use chrono::DateTime;
use rusqlite::{params, Connection};
use std::sync::Mutex;

pub struct SqliteCampaignRepo {
    conn: Mutex<Connection>,
}

impl SqliteCampaignRepo {
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    fn row_to_campaign(row: &rusqlite::Row) -> Result<LaunchedCampaign, rusqlite::Error> {
        let channel_str: String = row.get(2)?;
        let launched_str: String = row.get(8)?;

        Ok(LaunchedCampaign {
            id: row.get(0)?,
            sku: row.get(1)?,
            channel: channel_str
                .parse()
                .map_err(|_| {
                    eprintln!(
                        "Warning: invalid channel '{}' in campaign, defaulting to Hybrid",
                        channel_str
                    );
                    rusqlite::Error::InvalidParameterName(channel_str.clone())
                })
                .unwrap_or(Channel::Hybrid),
            name: row.get(3)?,
            budget: row.get(4)?,
            expected_roi: row.get(5)?,
            source_opportunity: row.get(6)?,
            status: row.get(7)?,
            launched_at: DateTime::parse_from_rfc3339(&launched_str)
                .map(|dt| dt.with_timezone(&chrono::Utc))
                .unwrap_or_else(|_| chrono::Utc::now()),
        })
    }
}

impl CampaignRepository for SqliteCampaignRepo {
    fn append(&self, campaign: &LaunchedCampaign) -> Result<(), DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        conn.execute(
            "INSERT INTO campaigns (id, sku, channel, name, budget, expected_roi, source_opportunity, status, launched_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                campaign.id,
                campaign.sku,
                campaign.channel.to_string(),
                campaign.name,
                campaign.budget,
                campaign.expected_roi,
                campaign.source_opportunity,
                campaign.status,
                campaign.launched_at.to_rfc3339(),
            ],
        )
        .map_err(|e| DomainError::Database(format!("Failed to append campaign: {e}")))?;
        Ok(())
    }

    fn list(&self, filter: &CampaignFilter) -> Result<Vec<LaunchedCampaign>, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let mut sql = String::from(
            "SELECT id, sku, channel, name, budget, expected_roi, source_opportunity, status, launched_at FROM campaigns WHERE 1=1",
        );
        let mut param_values: Vec<Box<dyn rusqlite::types::ToSql>> = Vec::new();

        if let Some(sku) = &filter.sku {
            sql.push_str(&format!(" AND sku = ?{}", param_values.len() + 1));
            param_values.push(Box::new(sku.clone()));
        }
        if let Some(since) = &filter.since {
            sql.push_str(&format!(" AND launched_at >= ?{}", param_values.len() + 1));
            param_values.push(Box::new(since.to_rfc3339()));
        }
        sql.push_str(" ORDER BY launched_at DESC");
        if let Some(limit) = filter.limit {
            sql.push_str(&format!(" LIMIT ?{}", param_values.len() + 1));
            param_values.push(Box::new(limit as i64));
        }

        let params_refs: Vec<&dyn rusqlite::types::ToSql> =
            param_values.iter().map(|p| p.as_ref()).collect();
        let mut stmt = conn
            .prepare(&sql)
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let campaigns = stmt
            .query_map(params_refs.as_slice(), Self::row_to_campaign)
            .map_err(|e| DomainError::Database(e.to_string()))?
            .filter_map(|r| r.ok())
            .collect();
        Ok(campaigns)
    }

    fn get(&self, id: &str) -> Result<Option<LaunchedCampaign>, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let mut stmt = conn
            .prepare(
                "SELECT id, sku, channel, name, budget, expected_roi, source_opportunity, status, launched_at FROM campaigns WHERE id = ?1",
            )
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let mut rows = stmt
            .query_map(params![id], Self::row_to_campaign)
            .map_err(|e| DomainError::Database(e.to_string()))?;
        Ok(rows.next().and_then(|r| r.ok()))
    }

    fn count(&self) -> Result<usize, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM campaigns", [], |row| row.get(0))
            .map_err(|e| DomainError::Database(e.to_string()))?;
        Ok(count as usize)
    }
}
