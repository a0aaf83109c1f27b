pub mod ballsim_vis2d;
