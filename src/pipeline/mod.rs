pub mod stage1_clean;
pub mod stage2_scores;
pub mod stage3_assign;
pub mod stage4_select;
