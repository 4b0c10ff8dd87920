pub mod modal;
pub mod player_score;
pub mod score_board;
pub mod score_settings;
