use crate::utils::error::Result;
use async_trait::async_trait;

/// A clickable reaction control. Only its slug attribute matters here.
pub trait ReactionControl {
    /// `data-slug` 的目前值，屬性不存在時回傳空字串
    fn slug(&self) -> String;
}

/// An element whose text is replaced with a count.
pub trait CountDisplay {
    fn set_text(&self, text: &str);
    fn text(&self) -> String;
}

pub trait ActivationEvent {
    fn prevent_default(&self);
}

// 瀏覽器中 fetch 的 future 不是 Send，統一走單執行緒
#[async_trait(?Send)]
pub trait ReactionTransport {
    /// GET `segments` joined under the server root and decode the JSON body.
    async fn get_json(&self, segments: &[&str]) -> Result<serde_json::Value>;
}
