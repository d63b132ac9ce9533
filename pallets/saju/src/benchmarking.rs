//! # Saju Chart Pallet Benchmarking
//!
//! 사주 排盘模块基准测试

#![cfg(feature = "runtime-benchmarks")]

use super::*;
use crate::types::Gender;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;
use pallet::*;

#[benchmarks]
mod benchmarks {
	use super::*;

	#[benchmark]
	fn create_saju_chart() {
		let caller: T::AccountId = whitelisted_caller();

		#[extrinsic_call]
		_(RawOrigin::Signed(caller), 2000, 6, 15, 3, false, Gender::Female);
	}

	#[benchmark]
	fn delete_saju_chart() {
		let caller: T::AccountId = whitelisted_caller();
		Pallet::<T>::create_saju_chart(
			RawOrigin::Signed(caller.clone()).into(),
			2000,
			6,
			15,
			-1,
			false,
			Gender::Male,
		)
		.unwrap();

		#[extrinsic_call]
		_(RawOrigin::Signed(caller), 0);
	}

	impl_benchmark_test_suite!(Pallet, crate::mock::new_test_ext(), crate::mock::Test);
}
