// Vec3f/Quatf are Bevy's math types so hosts can pass them straight through.
pub type Vec3f = bevy_math::Vec3;
pub type Quatf = bevy_math::Quat;
