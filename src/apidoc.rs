use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Workflow Adapter",
        version = "0.1.0",
        description = "WhatsApp bridge → workflow webhook adapter. Receives bridge events, forwards messages to the workflow, and relays replies."
    ),
    servers(
        (url = "http://localhost:3000", description = "Local dev")
    ),
    tags(
        (name = "webhooks", description = "Bridge event endpoints"),
        (name = "control", description = "Outbound send and health")
    ),
    // Handlers (paths)
    paths(
        crate::routes::bridge::receive_bridge,
        crate::routes::send::send_message,
        crate::routes::health::health,
    ),
    // Schemas used in requests/responses
    components(
        schemas(
            crate::models::bridge::BridgeWebhook,
            crate::models::workflow::WorkflowRequest,
            crate::models::workflow::WorkflowResponse,
            crate::models::common::SendMessageRequest,
            crate::models::common::SendMessageResponse,
            crate::models::common::HealthResponse,
            crate::models::common::ErrorMessage
        )
    )
)]
pub struct ApiDoc;
