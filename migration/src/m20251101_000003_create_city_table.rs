use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000002_create_state_table::State;

static IDX_CITY_STATE_ID: &str = "idx_city_state_id";
static FK_CITY_STATE_ID: &str = "fk_city_state_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // The foreign key is declared inline because SQLite cannot add one to an
        // existing table.
        manager
            .create_table(
                Table::create()
                    .table(City::Table)
                    .if_not_exists()
                    .col(pk_auto(City::Id))
                    .col(string_len(City::Name, 100))
                    .col(string_len(City::Description, 500))
                    .col(string_len(City::ImageReference, 100))
                    .col(text_null(City::Details))
                    .col(integer(City::StateId))
                    .col(timestamp(City::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_CITY_STATE_ID)
                            .from(City::Table, City::StateId)
                            .to(State::Table, State::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CITY_STATE_ID)
                    .table(City::Table)
                    .col(City::StateId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CITY_STATE_ID)
                    .table(City::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(City::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum City {
    Table,
    Id,
    Name,
    Description,
    ImageReference,
    Details,
    StateId,
    CreatedAt,
}
