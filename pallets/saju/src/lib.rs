//! # 사주 排盘 Pallet (Pallet Saju Chart)
//!
//! ## 概述
//!
//! 本 Pallet 实现韩式四柱（사주）排盘引擎，包括：
//! - 四柱计算（년주/월주/일주/시주）
//! - 五行分布统计与均衡判定
//! - 일간 기준 성격 해석（고정 템플릿 조립）
//! - 연간/월별 운세 조회（정적 콘텐츠 투과）
//!
//! ## 技术特性
//!
//! - **纪年换岁**：입춘（약 2월 4일）기준，공원 4년 = 갑자년 앵커
//! - **纪月**：12절기 근사표 기준，오호둔（五虎遁）규칙
//! - **纪日**：1900-01-01 = 갑자일 앵커의 60일 순환
//! - **纪时**：십이시진 코드（-1 = 미상）+ 오서둔（五鼠遁）규칙
//!
//! ## 设计约定
//!
//! 核心引擎（[`calculations`] / [`interpretation`]）是无状态纯函数，
//! 不做任何输入校验，也没有错误路径。链上只存储紧凑的出生输入与
//! 四柱索引缓存（[`types::SajuChartRecord`]），完整结果
//! （[`types::SajuResult`]）每次查询实时重算，不上链。
//!
//! 음력 입력（`is_lunar`）은 수신·회신만 하고 변환하지 않는다——
//! 호출측이 양력으로 환산해 넘겨야 하는 문서화된 한계다。

#![cfg_attr(not(feature = "std"), no_std)]

pub use pallet::*;

pub mod weights;
pub use weights::WeightInfo;

pub mod calculations;
pub mod constants;
pub mod interpretation;
pub mod runtime_api;
pub mod types;

#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

#[cfg(test)]
mod mock;


// 重新导出核心类型，方便外部使用
pub use types::{
	BalanceTier, BirthInfo, Cheongan, Ganji, Gender, Jiji, MonthlyFortune, Ohaeng,
	OhaengAnalysis, SajuChartRecord, SajuPillars, SajuResult, YearlyFortune,
};

#[frame_support::pallet]
pub mod pallet {
	use frame_support::pallet_prelude::*;
	use frame_system::pallet_prelude::*;
	use sp_std::vec::Vec;

	use crate::types::*;
	use crate::weights::WeightInfo;

	// ============================================================================
	// Pallet 配置
	// ============================================================================

	/// Pallet 配置 Trait
	#[pallet::config]
	pub trait Config: frame_system::Config<RuntimeEvent: From<Event<Self>>> {
		/// 权重信息
		type WeightInfo: crate::weights::WeightInfo;

		/// 每个账户最多保存的命盘数量
		#[pallet::constant]
		type MaxChartsPerAccount: Get<u32>;
	}

	#[pallet::pallet]
	pub struct Pallet<T>(_);

	// ============================================================================
	// 存储项
	// ============================================================================

	/// 下一个命盘 ID 计数器
	#[pallet::storage]
	#[pallet::getter(fn next_chart_id)]
	pub type NextChartId<T: Config> = StorageValue<_, u64, ValueQuery>;

	/// 存储映射: 命盘ID -> 命盘记录（紧凑结构）
	///
	/// 只存出生输入与四柱索引；五行分析、解读文案通过查询接口
	/// 实时计算，不占用链上存储。
	#[pallet::storage]
	#[pallet::getter(fn chart_by_id)]
	pub type ChartById<T: Config> = StorageMap<
		_,
		Blake2_128Concat,
		u64,
		SajuChartRecord<T::AccountId, BlockNumberFor<T>>,
	>;

	/// 存储映射: 用户 -> 命盘ID列表
	#[pallet::storage]
	#[pallet::getter(fn user_charts)]
	pub type UserCharts<T: Config> = StorageMap<
		_,
		Blake2_128Concat,
		T::AccountId,
		BoundedVec<u64, T::MaxChartsPerAccount>,
		ValueQuery,
	>;

	// ============================================================================
	// 事件
	// ============================================================================

	#[pallet::event]
	#[pallet::generate_deposit(pub(super) fn deposit_event)]
	pub enum Event<T: Config> {
		/// 命盘创建成功 [所有者, 命盘ID, 出生信息]
		SajuChartCreated {
			owner: T::AccountId,
			chart_id: u64,
			birth: BirthInfo,
		},
		/// 命盘删除 [所有者, 命盘ID]
		SajuChartDeleted {
			owner: T::AccountId,
			chart_id: u64,
		},
	}

	// ============================================================================
	// 错误
	// ============================================================================

	#[pallet::error]
	pub enum Error<T> {
		/// 无效的月份（应为 1-12）
		InvalidMonth,
		/// 无效的时辰编码（应为 -1 或 0-11）
		InvalidHourCode,
		/// 命盘数量过多
		TooManyCharts,
		/// 命盘未找到
		ChartNotFound,
		/// 非命盘所有者
		NotChartOwner,
		/// 命盘ID已达到最大值
		ChartIdOverflow,
	}

	// ============================================================================
	// 可调用函数
	// ============================================================================

	#[pallet::call]
	impl<T: Config> Pallet<T> {
		/// 创建사주命盘
		///
		/// 按出生信息计算四柱并存储紧凑记录。完整的五行分析与
		/// 해석 문안은 저장하지 않고 [`Pallet::saju_result_of`]로
		/// 조회 시 재계산한다。
		///
		/// # 参数
		///
		/// - `origin`: 交易发起者
		/// - `year`: 公历年
		/// - `month`: 公历月（1-12）
		/// - `day`: 公历日。**不校验**是否超出当月天数——越界值按
		///   日期算术自然进位到下月（예: 4월 31일 → 5월 1일），与
		///   既有系统行为逐位一致，属约定行为而非缺陷。
		/// - `hour_code`: 시진 코드，-1 = 출생 시각 미상（시주 생략），
		///   0-11 = 자시부터의 두 시간 단위
		/// - `is_lunar`: 输入是否为음력。只回显，不做음력→양력转换
		/// - `gender`: 성별（해석 문안의 호칭 치환에만 사용）
		///
		/// # 校验范围
		///
		/// 只拦截会破坏存储索引完整性的输入（月份、时辰编码越界）；
		/// 引擎本身保持零校验的全函数语义。
		#[pallet::call_index(0)]
		#[pallet::weight(T::WeightInfo::create_saju_chart())]
		pub fn create_saju_chart(
			origin: OriginFor<T>,
			year: i32,
			month: u8,
			day: u8,
			hour_code: i8,
			is_lunar: bool,
			gender: Gender,
		) -> DispatchResult {
			let who = ensure_signed(origin)?;

			// 1. 校验存储完整性所需的输入范围
			ensure!((1..=12).contains(&month), Error::<T>::InvalidMonth);
			ensure!((-1..=11).contains(&hour_code), Error::<T>::InvalidHourCode);

			// 2. 检查账户命盘数量限制
			let existing = UserCharts::<T>::get(&who);
			ensure!(
				existing.len() < T::MaxChartsPerAccount::get() as usize,
				Error::<T>::TooManyCharts
			);

			// 3. 计算四柱索引缓存
			let birth = BirthInfo { year, month, day, hour_code, is_lunar, gender };
			let pillars = crate::calculations::four_pillars(&birth);

			// 4. 分配命盘 ID 并存储
			let chart_id = NextChartId::<T>::get();
			ensure!(chart_id < u64::MAX, Error::<T>::ChartIdOverflow);

			let record = SajuChartRecord {
				owner: who.clone(),
				birth,
				pillars,
				created_at: frame_system::Pallet::<T>::block_number(),
			};
			ChartById::<T>::insert(chart_id, record);

			UserCharts::<T>::try_mutate(&who, |charts| {
				charts.try_push(chart_id).map_err(|_| Error::<T>::TooManyCharts)
			})?;

			NextChartId::<T>::put(chart_id + 1);

			log::debug!(
				target: "saju",
				"saju chart created: owner={:?} id={} ({}-{}-{} hour_code={})",
				who, chart_id, year, month, day, hour_code,
			);

			// 5. 触发事件
			Self::deposit_event(Event::SajuChartCreated { owner: who, chart_id, birth });

			Ok(())
		}

		/// 删除命盘
		///
		/// 只有命盘所有者可以删除自己的命盘。
		///
		/// # 参数
		///
		/// - `origin`: 交易发起者
		/// - `chart_id`: 命盘ID
		#[pallet::call_index(1)]
		#[pallet::weight(T::WeightInfo::delete_saju_chart())]
		pub fn delete_saju_chart(origin: OriginFor<T>, chart_id: u64) -> DispatchResult {
			let who = ensure_signed(origin)?;

			let record = ChartById::<T>::get(chart_id).ok_or(Error::<T>::ChartNotFound)?;
			ensure!(record.owner == who, Error::<T>::NotChartOwner);

			ChartById::<T>::remove(chart_id);

			// 从用户的命盘列表中删除
			UserCharts::<T>::mutate(&who, |charts| {
				charts.retain(|&id| id != chart_id);
			});

			log::debug!(target: "saju", "saju chart deleted: owner={:?} id={}", who, chart_id);

			Self::deposit_event(Event::SajuChartDeleted { owner: who, chart_id });

			Ok(())
		}
	}

	// ============================================================================
	// 查询辅助函数（Runtime API 后端）
	// ============================================================================

	impl<T: Config> Pallet<T> {
		/// RPC 接口：按命盘ID实时计算完整排盘结果
		///
		/// 此函数由 Runtime API 调用，不消耗 gas，不上链。
		/// 结果从存储的出生输入重算，算法升级后自动生效。
		///
		/// # 返回
		/// - `Some(SajuResult)`: 完整排盘结果
		/// - `None`: 命盘不存在
		pub fn saju_result_of(chart_id: u64) -> Option<SajuResult> {
			let record = ChartById::<T>::get(chart_id)?;
			Some(crate::interpretation::calculate_saju(&record.birth))
		}

		/// RPC 接口：临时排盘（不存储，免费）
		///
		/// 输入不经过任何校验——引擎对整数输入全定义，月份/时辰
		/// 越界时按引擎的取模与进位语义得到确定性结果。
		pub fn calculate_saju_temp(
			year: i32,
			month: u8,
			day: u8,
			hour_code: i8,
			is_lunar: bool,
			gender: Gender,
		) -> SajuResult {
			let birth = BirthInfo { year, month, day, hour_code, is_lunar, gender };
			crate::interpretation::calculate_saju(&birth)
		}

		/// RPC 接口：12개월 전체 月度운세
		pub fn monthly_fortunes() -> Vec<MonthlyFortune> {
			crate::interpretation::monthly_fortunes()
		}
	}
}
