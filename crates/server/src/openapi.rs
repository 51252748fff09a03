use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(ToSchema)]
pub struct DeviceAttributesDoc {
    pub battery_power: i32,
    pub blue: bool,
    pub clock_speed: f64,
    pub dual_sim: bool,
    pub fc: i32,
    pub four_g: bool,
    pub int_memory: i32,
    pub m_dep: f64,
    pub mobile_wt: i32,
    pub n_cores: i32,
    pub pc: i32,
    pub px_height: i32,
    pub px_width: i32,
    pub ram: i32,
    pub sc_h: i32,
    pub sc_w: i32,
    pub talk_time: i32,
    pub three_g: bool,
    pub touch_screen: bool,
    pub wifi: bool,
}

#[derive(ToSchema)]
pub struct DeviceDoc {
    pub id: i64,
    pub battery_power: i32,
    pub blue: bool,
    pub clock_speed: f64,
    pub dual_sim: bool,
    pub fc: i32,
    pub four_g: bool,
    pub int_memory: i32,
    pub m_dep: f64,
    pub mobile_wt: i32,
    pub n_cores: i32,
    pub pc: i32,
    pub px_height: i32,
    pub px_width: i32,
    pub ram: i32,
    pub sc_h: i32,
    pub sc_w: i32,
    pub talk_time: i32,
    pub three_g: bool,
    pub touch_screen: bool,
    pub wifi: bool,
    pub price_range: i32,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::devices::list,
        crate::routes::devices::get,
        crate::routes::devices::create,
        crate::routes::devices::predict,
    ),
    components(
        schemas(
            HealthResponse,
            DeviceAttributesDoc,
            DeviceDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "devices")
    )
)]
pub struct ApiDoc;
