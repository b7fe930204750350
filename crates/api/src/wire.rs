use repdesk_core::domain::SalesRep;
use serde::Deserialize;

/// Envelope returned by `GET /api/sales-reps`.
#[derive(Debug, Deserialize)]
pub struct RosterEnvelope {
    #[serde(rename = "salesReps")]
    pub sales_reps: Vec<SalesRep>,
}

/// Pure body-to-roster decoding, kept separate from transport so it can be
/// exercised without a socket.
pub fn parse_roster(body: &str) -> Result<Vec<SalesRep>, serde_json::Error> {
    serde_json::from_str::<RosterEnvelope>(body).map(|envelope| envelope.sales_reps)
}
