pub mod pitch_canvas;
