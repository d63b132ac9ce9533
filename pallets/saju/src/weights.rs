//! # Saju Chart Pallet Weights
//!
//! 사주 排盘模块权重定义

use frame_support::{traits::Get, weights::Weight};

/// 权重信息 Trait
pub trait WeightInfo {
	fn create_saju_chart() -> Weight;
	fn delete_saju_chart() -> Weight;
}

/// Substrate 权重实现
pub struct SubstrateWeight<T>(core::marker::PhantomData<T>);
impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
	fn create_saju_chart() -> Weight {
		Weight::from_parts(60_000_000, 0)
			.saturating_add(T::DbWeight::get().reads(2))
			.saturating_add(T::DbWeight::get().writes(3))
	}
	fn delete_saju_chart() -> Weight {
		Weight::from_parts(30_000_000, 0)
			.saturating_add(T::DbWeight::get().reads(2))
			.saturating_add(T::DbWeight::get().writes(2))
	}
}

/// 默认权重实现（用于测试）
impl WeightInfo for () {
	fn create_saju_chart() -> Weight {
		Weight::from_parts(60_000_000, 0)
	}
	fn delete_saju_chart() -> Weight {
		Weight::from_parts(30_000_000, 0)
	}
}
