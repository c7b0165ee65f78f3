//! API Models

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use mates_core::{CampaignCard, DonorCard, RequestCard, SubmissionError};

/// Standard API response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<ErrorResponse>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(code: &str, message: &str) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ErrorResponse {
                code: code.to_string(),
                message: message.to_string(),
            }),
        }
    }
}

/// Error response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

/// HTTP status plus wire code for a submission failure
pub fn classify(error: &SubmissionError) -> (axum::http::StatusCode, &'static str) {
    use axum::http::StatusCode;
    match error {
        SubmissionError::Validation(_) => (StatusCode::BAD_REQUEST, "validation_error"),
        SubmissionError::Lookup(_) => (StatusCode::BAD_GATEWAY, "lookup_error"),
        SubmissionError::Persistence(_) => {
            (StatusCode::INTERNAL_SERVER_ERROR, "persistence_error")
        }
        SubmissionError::Auth(_) => (StatusCode::UNAUTHORIZED, "auth_error"),
    }
}

// ============ Icons ============

/// Icon family tag. Clients resolve (family, name) to a renderable
/// asset; no executable reference ever travels through data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum IconFamily {
    MaterialIcons,
    FontAwesome,
    Fontisto,
    SimpleLineIcons,
    Octicons,
    Ionicons,
}

/// Presentation icon reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct IconRef {
    pub family: IconFamily,
    pub name: String,
}

impl IconRef {
    pub fn new(family: IconFamily, name: &str) -> Self {
        Self {
            family,
            name: name.to_string(),
        }
    }

    /// Icon shown on request cards
    pub fn blood_drop() -> Self {
        Self::new(IconFamily::Fontisto, "blood-drop")
    }

    /// Icon shown on campaign cards
    pub fn campaign() -> Self {
        Self::new(IconFamily::Octicons, "organization")
    }
}

// ============ Requests ============

/// Donation request card as served on the feed
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RequestView {
    pub id: u64,
    pub name: String,
    pub location: String,
    pub posted: String,
    pub blood_type: String,
    pub mobile: String,
    pub icon: IconRef,
}

impl From<RequestCard> for RequestView {
    fn from(card: RequestCard) -> Self {
        Self {
            id: card.id,
            name: card.name,
            location: card.location,
            posted: card.posted,
            blood_type: card.blood_type,
            mobile: card.mobile,
            icon: IconRef::blood_drop(),
        }
    }
}

/// Donation request submission payload
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SubmitRequestBody {
    pub full_name: String,
    pub city: String,
    pub hospital: String,
    pub blood_type: String,
    pub mobile: String,
    #[serde(default)]
    pub note: String,
    /// Latitude of the device fix, when current-location was used
    #[serde(default)]
    pub latitude: Option<f64>,
    /// Longitude of the device fix
    #[serde(default)]
    pub longitude: Option<f64>,
}

/// Identifier of a newly persisted record
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatedResponse {
    pub id: u64,
}

// ============ Campaigns ============

/// Campaign card as served on the list
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CampaignView {
    pub id: u64,
    pub organizer: String,
    pub organization: String,
    pub location: String,
    pub date: String,
    pub mobile: String,
    pub note: String,
    pub icon: IconRef,
}

impl From<CampaignCard> for CampaignView {
    fn from(card: CampaignCard) -> Self {
        Self {
            id: card.id,
            organizer: card.organizer,
            organization: card.organization,
            location: card.location,
            date: card.date,
            mobile: card.mobile,
            note: card.note,
            icon: IconRef::campaign(),
        }
    }
}

/// Campaign scheduling payload
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ScheduleCampaignBody {
    pub organizer_name: String,
    pub organization_name: String,
    pub address: String,
    pub donation_date: String,
    pub phone_number: String,
    #[serde(default)]
    pub note: String,
}

// ============ Donors ============

/// Donor as served on the search view
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DonorView {
    pub id: u64,
    pub name: String,
    pub location: String,
    pub blood_type: String,
    pub mobile: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl From<DonorCard> for DonorView {
    fn from(card: DonorCard) -> Self {
        Self {
            id: card.id,
            name: card.name,
            location: card.location,
            blood_type: card.blood_type,
            mobile: card.mobile,
            latitude: card.coordinates.map(|p| p.latitude),
            longitude: card.coordinates.map(|p| p.longitude),
        }
    }
}

// ============ Auth ============

/// Donor registration payload
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegisterBody {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub phone_number: String,
    pub blood_type: String,
    pub location: String,
    pub hospital: String,
    pub date_of_birth: String,
    #[serde(default)]
    pub last_donation_date: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    pub declaration_accepted: bool,
}

/// Registered donor summary
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegisteredResponse {
    pub id: u64,
    pub uid: String,
    /// Verification mail has been dispatched to this address
    pub email: String,
}

/// Sign-in payload
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginBody {
    pub email: String,
    pub password: String,
}

/// Signed-in session
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SessionResponse {
    pub uid: String,
    pub token: String,
}

// ============ Assistant ============

/// One transcript turn on the wire
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChatTurnBody {
    /// "user" or "model"
    pub role: String,
    pub text: String,
}

/// Assistant chat payload: the rolling transcript, last turn the
/// user's message
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChatBody {
    pub transcript: Vec<ChatTurnBody>,
}

/// Assistant reply
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChatReply {
    pub role: String,
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_ref_serializes_as_tag_pair() {
        let icon = IconRef::blood_drop();
        let json = serde_json::to_value(&icon).unwrap();
        assert_eq!(json["family"], "fontisto");
        assert_eq!(json["name"], "blood-drop");
    }

    #[test]
    fn test_classify_covers_every_failure_kind() {
        use axum::http::StatusCode;
        use mates_core::{AuthError, LookupError, PersistenceError};

        let validation = SubmissionError::Validation("bad mobile".into());
        assert_eq!(classify(&validation), (StatusCode::BAD_REQUEST, "validation_error"));

        let lookup: SubmissionError = LookupError::NoResults.into();
        assert_eq!(classify(&lookup), (StatusCode::BAD_GATEWAY, "lookup_error"));

        let persistence: SubmissionError =
            PersistenceError::WriteFailed("store rejected the document".into()).into();
        assert_eq!(
            classify(&persistence),
            (StatusCode::INTERNAL_SERVER_ERROR, "persistence_error")
        );

        let auth: SubmissionError = AuthError::EmailInUse.into();
        assert_eq!(classify(&auth), (StatusCode::UNAUTHORIZED, "auth_error"));
    }

    #[test]
    fn test_error_response_envelope() {
        let response: ApiResponse<()> = ApiResponse::error("validation_error", "bad mobile");
        assert!(!response.success);
        assert_eq!(response.error.unwrap().code, "validation_error");
    }
}
