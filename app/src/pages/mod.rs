// One page per shell view

mod home;
mod lab;
mod report;
mod survey;
mod upload;

pub use home::HomePage;
pub use lab::LabPage;
pub use report::ReportPage;
pub use survey::SurveyPage;
pub use upload::UploadPage;
