//! SI 次元タグの型エイリアス。

use typenum::{N1, N2, N3, P1, P2, Z0};

use crate::traits::Dim;

pub type Dimensionless = Dim<Z0, Z0, Z0, Z0, Z0, Z0, Z0>;

// ===== 基本次元 =====

pub type Mass = Dim<P1, Z0, Z0, Z0, Z0, Z0, Z0>;
pub type Length = Dim<Z0, P1, Z0, Z0, Z0, Z0, Z0>;
pub type Time = Dim<Z0, Z0, P1, Z0, Z0, Z0, Z0>;
pub type Current = Dim<Z0, Z0, Z0, P1, Z0, Z0, Z0>;
pub type Temperature = Dim<Z0, Z0, Z0, Z0, P1, Z0, Z0>;
pub type Amount = Dim<Z0, Z0, Z0, Z0, Z0, P1, Z0>;
pub type Luminosity = Dim<Z0, Z0, Z0, Z0, Z0, Z0, P1>;

// ===== 組立次元 =====

pub type Frequency = Dim<Z0, Z0, N1, Z0, Z0, Z0, Z0>;
pub type Velocity = Dim<Z0, P1, N1, Z0, Z0, Z0, Z0>;
pub type Acceleration = Dim<Z0, P1, N2, Z0, Z0, Z0, Z0>;
pub type Force = Dim<P1, P1, N2, Z0, Z0, Z0, Z0>;
pub type Pressure = Dim<P1, N1, N2, Z0, Z0, Z0, Z0>;
pub type Energy = Dim<P1, P2, N2, Z0, Z0, Z0, Z0>;
pub type Power = Dim<P1, P2, N3, Z0, Z0, Z0, Z0>;
