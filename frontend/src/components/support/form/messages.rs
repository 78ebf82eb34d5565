pub enum Msg {
    UpdateSubject(String),
    UpdateMessage(String),
    UpdateEmail(String),
    UpdateCourse(String),
    FileSelected(web_sys::File),
    FileRead { file_name: String, bytes: Vec<u8> },
    UploadProgress { loaded: f64, total: f64 },
    UploadFinished { file_name: String, token: String },
    UploadFailed { file_name: String, status: u16 },
    UploadAborted { file_name: String },
    FileRemoved(String),
    Submit,
    TicketSubmitted,
}
