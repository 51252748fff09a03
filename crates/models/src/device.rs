use sea_orm::{entity::prelude::*, ActiveValue::NotSet, Set};
use serde::{Deserialize, Serialize};

/// Phone hardware record. `price_range` stays at 0 until a prediction
/// has been applied, then holds the most recent predictor output.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "device")]
pub struct Model {
    #[sea_orm(primary_key)]
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

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// The attribute snapshot sent to the predictor and accepted on create.
/// Deliberately excludes `id` and `price_range`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceAttributes {
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

impl Model {
    /// Snapshot of the attribute columns, without identity or classification.
    pub fn attributes(&self) -> DeviceAttributes {
        DeviceAttributes {
            battery_power: self.battery_power,
            blue: self.blue,
            clock_speed: self.clock_speed,
            dual_sim: self.dual_sim,
            fc: self.fc,
            four_g: self.four_g,
            int_memory: self.int_memory,
            m_dep: self.m_dep,
            mobile_wt: self.mobile_wt,
            n_cores: self.n_cores,
            pc: self.pc,
            px_height: self.px_height,
            px_width: self.px_width,
            ram: self.ram,
            sc_h: self.sc_h,
            sc_w: self.sc_w,
            talk_time: self.talk_time,
            three_g: self.three_g,
            touch_screen: self.touch_screen,
            wifi: self.wifi,
        }
    }

    /// Same record with a new classification.
    pub fn with_price_range(mut self, price_range: i32) -> Self {
        self.price_range = price_range;
        self
    }
}

/// Build a full record from its parts. Used by stores that assign ids
/// outside the database.
pub fn model_from_parts(id: i64, attrs: &DeviceAttributes, price_range: i32) -> Model {
    Model {
        id,
        battery_power: attrs.battery_power,
        blue: attrs.blue,
        clock_speed: attrs.clock_speed,
        dual_sim: attrs.dual_sim,
        fc: attrs.fc,
        four_g: attrs.four_g,
        int_memory: attrs.int_memory,
        m_dep: attrs.m_dep,
        mobile_wt: attrs.mobile_wt,
        n_cores: attrs.n_cores,
        pc: attrs.pc,
        px_height: attrs.px_height,
        px_width: attrs.px_width,
        ram: attrs.ram,
        sc_h: attrs.sc_h,
        sc_w: attrs.sc_w,
        talk_time: attrs.talk_time,
        three_g: attrs.three_g,
        touch_screen: attrs.touch_screen,
        wifi: attrs.wifi,
        price_range,
    }
}

/// Active model for an insert: id left to the database, every attribute set.
pub fn active_model_from(attrs: &DeviceAttributes, price_range: i32) -> ActiveModel {
    ActiveModel {
        id: NotSet,
        battery_power: Set(attrs.battery_power),
        blue: Set(attrs.blue),
        clock_speed: Set(attrs.clock_speed),
        dual_sim: Set(attrs.dual_sim),
        fc: Set(attrs.fc),
        four_g: Set(attrs.four_g),
        int_memory: Set(attrs.int_memory),
        m_dep: Set(attrs.m_dep),
        mobile_wt: Set(attrs.mobile_wt),
        n_cores: Set(attrs.n_cores),
        pc: Set(attrs.pc),
        px_height: Set(attrs.px_height),
        px_width: Set(attrs.px_width),
        ram: Set(attrs.ram),
        sc_h: Set(attrs.sc_h),
        sc_w: Set(attrs.sc_w),
        talk_time: Set(attrs.talk_time),
        three_g: Set(attrs.three_g),
        touch_screen: Set(attrs.touch_screen),
        wifi: Set(attrs.wifi),
        price_range: Set(price_range),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_attrs() -> DeviceAttributes {
        DeviceAttributes {
            battery_power: 1043,
            blue: true,
            clock_speed: 1.8,
            dual_sim: true,
            fc: 14,
            four_g: false,
            int_memory: 5,
            m_dep: 0.1,
            mobile_wt: 193,
            n_cores: 3,
            pc: 16,
            px_height: 226,
            px_width: 1412,
            ram: 3476,
            sc_h: 12,
            sc_w: 7,
            talk_time: 2,
            three_g: true,
            touch_screen: true,
            wifi: false,
        }
    }

    #[test]
    fn attributes_round_trip_through_model() {
        let attrs = sample_attrs();
        let model = model_from_parts(7, &attrs, 0);
        assert_eq!(model.id, 7);
        assert_eq!(model.price_range, 0);
        assert_eq!(model.attributes(), attrs);
    }

    #[test]
    fn with_price_range_touches_only_classification() {
        let attrs = sample_attrs();
        let model = model_from_parts(1, &attrs, 0);
        let updated = model.clone().with_price_range(3);
        assert_eq!(updated.price_range, 3);
        assert_eq!(updated.id, model.id);
        assert_eq!(updated.attributes(), model.attributes());
    }

    #[test]
    fn attributes_deserialize_with_missing_fields_defaulted() {
        // Mirrors the permissive create payload: absent fields become 0/false.
        let attrs: DeviceAttributes = serde_json::from_str(r#"{"ram": 2048}"#).unwrap();
        assert_eq!(attrs.ram, 2048);
        assert_eq!(attrs.battery_power, 0);
        assert!(!attrs.wifi);
    }

    #[test]
    fn attributes_payload_has_no_identity_fields() {
        let json = serde_json::to_value(sample_attrs()).unwrap();
        let obj = json.as_object().unwrap();
        assert!(!obj.contains_key("id"));
        assert!(!obj.contains_key("price_range"));
        assert_eq!(obj.len(), 20);
    }
}
