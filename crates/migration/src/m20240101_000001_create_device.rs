//! Create `device` table.
//!
//! One row per phone, hardware attributes plus the predicted price range.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Device::Table)
                    .if_not_exists()
                    .col(big_integer(Device::Id).primary_key().auto_increment())
                    .col(integer(Device::BatteryPower))
                    .col(boolean(Device::Blue))
                    .col(double(Device::ClockSpeed))
                    .col(boolean(Device::DualSim))
                    .col(integer(Device::Fc))
                    .col(boolean(Device::FourG))
                    .col(integer(Device::IntMemory))
                    .col(double(Device::MDep))
                    .col(integer(Device::MobileWt))
                    .col(integer(Device::NCores))
                    .col(integer(Device::Pc))
                    .col(integer(Device::PxHeight))
                    .col(integer(Device::PxWidth))
                    .col(integer(Device::Ram))
                    .col(integer(Device::ScH))
                    .col(integer(Device::ScW))
                    .col(integer(Device::TalkTime))
                    .col(boolean(Device::ThreeG))
                    .col(boolean(Device::TouchScreen))
                    .col(boolean(Device::Wifi))
                    .col(integer(Device::PriceRange).default(0))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Device::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Device {
    Table,
    Id,
    BatteryPower,
    Blue,
    ClockSpeed,
    DualSim,
    Fc,
    FourG,
    IntMemory,
    MDep,
    MobileWt,
    NCores,
    Pc,
    PxHeight,
    PxWidth,
    Ram,
    ScH,
    ScW,
    TalkTime,
    ThreeG,
    TouchScreen,
    Wifi,
    PriceRange,
}
