use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Tabla de directores
        manager
            .create_table(
                Table::create()
                    .table(Director::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Director::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Director::Nombres).string().not_null())
                    .col(ColumnDef::new(Director::Apellidos).string().not_null())
                    .col(
                        ColumnDef::new(Director::Usuario)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Director::Password).string().not_null())
                    .to_owned(),
            )
            .await?;

        // Tabla de docentes
        manager
            .create_table(
                Table::create()
                    .table(Docente::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Docente::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Docente::Nombres).string().not_null())
                    .col(ColumnDef::new(Docente::Apellidos).string().not_null())
                    .col(ColumnDef::new(Docente::Materia).string().null())
                    .col(
                        ColumnDef::new(Docente::Usuario)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Docente::Password).string().not_null())
                    .to_owned(),
            )
            .await?;

        // Tabla de estudiantes
        manager
            .create_table(
                Table::create()
                    .table(Estudiante::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Estudiante::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Estudiante::Nombres).string().not_null())
                    .col(ColumnDef::new(Estudiante::Apellidos).string().not_null())
                    .col(ColumnDef::new(Estudiante::Grado).string().not_null())
                    .col(ColumnDef::new(Estudiante::Seccion).string().not_null())
                    .col(ColumnDef::new(Estudiante::FechaNacimiento).date().null())
                    .col(
                        ColumnDef::new(Estudiante::Usuario)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Estudiante::Password).string().not_null())
                    .to_owned(),
            )
            .await?;

        // Catalogo de niveles de gravedad
        manager
            .create_table(
                Table::create()
                    .table(Tipogravedad::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Tipogravedad::IdGravedad)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Tipogravedad::NombreGravedad)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Tipogravedad::Descripcion).string().null())
                    .col(ColumnDef::new(Tipogravedad::Puntos).integer().null())
                    .to_owned(),
            )
            .await?;

        // Catalogo de conductas (reglas)
        manager
            .create_table(
                Table::create()
                    .table(Conducta::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Conducta::IdConducta)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Conducta::NombreConducta)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Conducta::Descripcion).text().not_null())
                    .col(ColumnDef::new(Conducta::IdGravedad).big_integer().not_null())
                    .col(
                        ColumnDef::new(Conducta::Activo)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Conducta::Table, Conducta::IdGravedad)
                            .to(Tipogravedad::Table, Tipogravedad::IdGravedad)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // Registros de conducta (incidentes)
        manager
            .create_table(
                Table::create()
                    .table(Registroconductas::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Registroconductas::IdRegistro)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Registroconductas::IdEstudiante)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Registroconductas::IdDocente)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Registroconductas::IdConducta)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Registroconductas::FechaRegistro)
                            .date()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Registroconductas::AccionesTomadas)
                            .text()
                            .null(),
                    )
                    .col(ColumnDef::new(Registroconductas::Comentarios).text().null())
                    .col(
                        ColumnDef::new(Registroconductas::EvidenciaUrl)
                            .string()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Registroconductas::Leido)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Registroconductas::FechaLectura)
                            .date()
                            .null(),
                    )
                    .col(ColumnDef::new(Registroconductas::Estado).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Registroconductas::Table, Registroconductas::IdEstudiante)
                            .to(Estudiante::Table, Estudiante::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Registroconductas::Table, Registroconductas::IdDocente)
                            .to(Docente::Table, Docente::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Registroconductas::Table, Registroconductas::IdConducta)
                            .to(Conducta::Table, Conducta::IdConducta)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // Observaciones
        manager
            .create_table(
                Table::create()
                    .table(Observaciones::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Observaciones::IdObservacion)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Observaciones::IdEstudiante)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Observaciones::IdDocente)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Observaciones::TipoObservacion)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Observaciones::Descripcion).text().not_null())
                    .col(ColumnDef::new(Observaciones::Fecha).date().not_null())
                    .col(
                        ColumnDef::new(Observaciones::Leido)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Observaciones::FechaLectura).date().null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Observaciones::Table, Observaciones::IdEstudiante)
                            .to(Estudiante::Table, Estudiante::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Observaciones::Table, Observaciones::IdDocente)
                            .to(Docente::Table, Docente::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Observaciones::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Registroconductas::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Conducta::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Tipogravedad::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Estudiante::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Docente::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Director::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Director {
    Table,
    Id,
    Nombres,
    Apellidos,
    Usuario,
    Password,
}

#[derive(DeriveIden)]
enum Docente {
    Table,
    Id,
    Nombres,
    Apellidos,
    Materia,
    Usuario,
    Password,
}

#[derive(DeriveIden)]
enum Estudiante {
    Table,
    Id,
    Nombres,
    Apellidos,
    Grado,
    Seccion,
    FechaNacimiento,
    Usuario,
    Password,
}

#[derive(DeriveIden)]
enum Tipogravedad {
    Table,
    IdGravedad,
    NombreGravedad,
    Descripcion,
    Puntos,
}

#[derive(DeriveIden)]
enum Conducta {
    Table,
    IdConducta,
    NombreConducta,
    Descripcion,
    IdGravedad,
    Activo,
}

#[derive(DeriveIden)]
enum Registroconductas {
    Table,
    IdRegistro,
    IdEstudiante,
    IdDocente,
    IdConducta,
    FechaRegistro,
    AccionesTomadas,
    Comentarios,
    EvidenciaUrl,
    Leido,
    FechaLectura,
    Estado,
}

#[derive(DeriveIden)]
enum Observaciones {
    Table,
    IdEstudiante,
    IdObservacion,
    IdDocente,
    TipoObservacion,
    Descripcion,
    Fecha,
    Leido,
    FechaLectura,
}
