use common::model::attachment::ReadTicket;
use common::model::data_uri::DataUri;

pub enum Msg {
    UpdateText(String),
    Submit,
    ToggleAttachment,
    FileSelected(web_sys::File),
    ReadCompleted { ticket: ReadTicket, preview: DataUri },
    ReadFailed { ticket: ReadTicket, reason: String },
}
