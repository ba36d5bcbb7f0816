//! Pipeline logic shared between the dashboard frontend and its host server.
//! Nothing in here touches the browser, so the whole submit → payload →
//! result → chart flow can be exercised natively.

pub mod chart;
pub mod dom;
pub mod payload;
pub mod results;
pub mod submission;
pub mod upload;
pub mod view;

pub use chart::ChartSpec;
pub use dom::{FieldKind, FieldSpec, FormKind, RequestEncoding};
pub use payload::{FieldValue, FormPayload, build_payload, serialize_form};
pub use results::{CropYieldResult, MarketPriceResult, PestDetectionResult, SoilHealthResult};
pub use submission::{SubmissionTicket, SubmissionTracker};
pub use upload::{UploadError, validate_upload};
pub use view::{ResultLine, ResultView, Segment, Tone};
