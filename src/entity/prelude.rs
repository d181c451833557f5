//! Reexportaciones para uso comodo de las entidades

pub use super::conductas::{
    ActiveModel as ConductaActiveModel, Entity as Conductas, Model as ConductaModel,
};
pub use super::directores::{
    ActiveModel as DirectorActiveModel, Entity as Directores, Model as DirectorModel,
};
pub use super::docentes::{
    ActiveModel as DocenteActiveModel, Entity as Docentes, Model as DocenteModel,
};
pub use super::estudiantes::{
    ActiveModel as EstudianteActiveModel, Entity as Estudiantes, Model as EstudianteModel,
};
pub use super::observaciones::{
    ActiveModel as ObservacionActiveModel, Entity as Observaciones, Model as ObservacionModel,
};
pub use super::registros_conducta::{
    ActiveModel as RegistroActiveModel, Entity as Registros, Model as RegistroModel,
};
pub use super::tipos_gravedad::{
    ActiveModel as GravedadActiveModel, Entity as Gravedades, Model as GravedadModel,
};
