use sea_orm_migration::{prelude::*, schema::*};

use super::m20251210_000001_create_user_table::Users;
use super::m20251211_000002_create_groups_table::Groups;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GroupMembers::Table)
                    .if_not_exists()
                    .col(integer(GroupMembers::UserId))
                    .col(integer(GroupMembers::GroupId))
                    .primary_key(
                        Index::create()
                            .name("pk_group_members")
                            .col(GroupMembers::UserId)
                            .col(GroupMembers::GroupId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_group_members_user_id")
                            .from(GroupMembers::Table, GroupMembers::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_group_members_group_id")
                            .from(GroupMembers::Table, GroupMembers::GroupId)
                            .to(Groups::Table, Groups::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GroupMembers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GroupMembers {
    #[sea_orm(iden = "groupMembers")]
    Table,
    #[sea_orm(iden = "userID")]
    UserId,
    #[sea_orm(iden = "groupID")]
    GroupId,
}
