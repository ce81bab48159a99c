mod arithmetic;
mod bit_manipulation;
mod bitwise;
mod compare;
mod divide;
mod multiply;
mod shift;
mod shuffle;
