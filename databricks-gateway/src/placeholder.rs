use tracing::info;

pub const ADX_NOTICE: &str =
    "ADX integration coming soon. This function will fetch data from ADX.";
pub const CHATBOT_NOTICE: &str =
    "Chatbot integration coming soon. This function will interact with ADX data.";

pub async fn adx_data_handler() -> &'static str {
    info!("ADX data request received");
    ADX_NOTICE
}

pub async fn chatbot_handler() -> &'static str {
    info!("Chatbot request received");
    CHATBOT_NOTICE
}
